//! Reservation Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{FieldSpec, FieldType, Record, RecordKind, dotted_email_domain};

/// Table reservation request
///
/// `date` (YYYY-MM-DD) and `time` (HH:MM) are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Reservation {
    pub name: String,
    #[validate(email, custom(function = "dotted_email_domain"))]
    pub email: Option<String>,
    pub phone: String,
    #[validate(range(min = 1, max = 20))]
    pub guests: i64,
    pub date: String,
    pub time: String,
    /// Special requests
    pub notes: Option<String>,
}

impl Record for Reservation {
    const KIND: RecordKind = RecordKind::Reservation;
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldType::String),
        FieldSpec::optional("email", FieldType::String),
        FieldSpec::required("phone", FieldType::String),
        FieldSpec::required("guests", FieldType::Integer),
        FieldSpec::required("date", FieldType::String),
        FieldSpec::required("time", FieldType::String),
        FieldSpec::optional("notes", FieldType::String),
    ];
}
