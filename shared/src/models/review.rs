//! Review Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{FieldSpec, FieldType, Record, RecordKind};

/// Guest review, written by guests and shown on the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Review {
    pub name: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
    pub comment: String,
    /// e.g. Google, Yelp
    pub source: Option<String>,
    pub avatar: Option<String>,
}

impl Record for Review {
    const KIND: RecordKind = RecordKind::Review;
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldType::String),
        FieldSpec::required("rating", FieldType::Integer),
        FieldSpec::required("comment", FieldType::String),
        FieldSpec::optional("source", FieldType::String),
        FieldSpec::optional("avatar", FieldType::String),
    ];
}

impl Review {
    pub fn new(name: impl Into<String>, rating: i64, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            comment: comment.into(),
            source: None,
            avatar: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_record;
    use serde_json::json;

    #[test]
    fn test_valid_review_round_trips() {
        let raw = json!({
            "name": "Sofia",
            "rating": 5,
            "comment": "Amazing",
            "source": "Google",
            "avatar": null
        });
        let review: Review = validate_record(raw.clone()).unwrap();

        assert_eq!(review, Review::new("Sofia", 5, "Amazing").with_source("Google"));
        assert_eq!(serde_json::to_value(&review).unwrap(), raw);
    }

    #[test]
    fn test_rating_bounds() {
        for rating in [1, 5] {
            let ok = validate_record::<Review>(json!({
                "name": "Luca", "rating": rating, "comment": "ok"
            }));
            assert!(ok.is_ok(), "rating {rating} should be accepted");
        }

        for rating in [0, 6, -3] {
            let err = validate_record::<Review>(json!({
                "name": "Luca", "rating": rating, "comment": "ok"
            }))
            .unwrap_err();
            assert_eq!(err.fields, vec!["rating"]);
        }
    }

    #[test]
    fn test_missing_comment_is_rejected() {
        let err = validate_record::<Review>(json!({"name": "Mia", "rating": 4})).unwrap_err();
        assert_eq!(err.fields, vec!["comment"]);
    }
}
