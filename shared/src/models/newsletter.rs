//! Newsletter Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{FieldSpec, FieldType, Record, RecordKind, dotted_email_domain};

/// Newsletter signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Newsletter {
    #[validate(email, custom(function = "dotted_email_domain"))]
    pub email: String,
    pub name: Option<String>,
}

impl Record for Newsletter {
    const KIND: RecordKind = RecordKind::Newsletter;
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::required("email", FieldType::String),
        FieldSpec::optional("name", FieldType::String),
    ];
}
