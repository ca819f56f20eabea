//! Record schemas and payload validation
//!
//! Inbound payloads arrive as untyped JSON. Validation runs in three steps,
//! and the first step that finds problems rejects the whole payload:
//!
//! 1. shape: the payload must be a JSON object
//! 2. schema: required fields present, every known field of the right type
//! 3. constraints: `validator` rules on the typed record (ranges, email)
//!
//! Unknown fields are ignored. Omitted optional fields take their defaults.
//! Numbers sent as strings (`"4"`, `"14.5"`) and integral floats (`5.0`) are
//! normalised in place before the typed record is built.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use thiserror::Error;
use validator::Validate;

use super::{MenuItem, Newsletter, Reservation, Review};
use crate::error::{AppError, ErrorCode};

/// JSON type expected for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// Any JSON number, or a string holding one
    Number,
    /// A whole number that fits in i64, as a number (`5`, `5.0`) or a
    /// decimal string (`"5"`)
    Integer,
    Boolean,
}

impl FieldType {
    /// Returns the value in its canonical JSON form, or `None` when it
    /// cannot be read as this type
    fn coerce(&self, value: &Value) -> Option<Value> {
        match (self, value) {
            (Self::String, Value::String(_)) | (Self::Boolean, Value::Bool(_)) => {
                Some(value.clone())
            }
            (Self::Number, Value::Number(_)) => Some(value.clone()),
            (Self::Number, Value::String(s)) => s.trim().parse::<Number>().ok().map(Value::Number),
            (Self::Integer, Value::Number(n)) => whole_number(n).map(Value::from),
            (Self::Integer, Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::from),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Number => "a number",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
        }
    }
}

fn whole_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// How a field behaves when absent or null
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    /// Must be present and non-null
    Required,
    /// May be absent or null
    Optional,
    /// May be absent (a default applies) but not null
    Defaulted,
}

/// Declarative description of one record field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Alternate key accepted on input (e.g. snake_case documents)
    pub alias: Option<&'static str>,
    pub ty: FieldType,
    presence: Presence,
}

impl FieldSpec {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            alias: None,
            ty,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            alias: None,
            ty,
            presence: Presence::Optional,
        }
    }

    pub const fn defaulted(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            alias: None,
            ty,
            presence: Presence::Defaulted,
        }
    }

    pub const fn alias(self, alias: &'static str) -> Self {
        Self {
            alias: Some(alias),
            ..self
        }
    }

    /// Checks this field and rewrites its value in canonical form
    ///
    /// Returns the problem with the field, if any.
    fn normalize(&self, obj: &mut Map<String, Value>) -> Option<String> {
        let key = match self.alias {
            Some(alias) if obj.contains_key(self.name) && obj.contains_key(alias) => {
                return Some(format!("conflicting keys {} and {alias}", self.name));
            }
            Some(alias) if obj.contains_key(alias) => alias,
            _ => self.name,
        };

        let value = match (obj.get_mut(key), self.presence) {
            (None, Presence::Required) => return Some("field required".to_string()),
            (None, _) => return None,
            (Some(Value::Null), Presence::Optional) => return None,
            (Some(Value::Null), Presence::Required) => {
                return Some("field required".to_string());
            }
            (Some(value), _) => value,
        };

        match self.ty.coerce(value) {
            Some(canonical) => {
                *value = canonical;
                None
            }
            None => Some(format!("expected {}", self.ty.name())),
        }
    }
}

/// The four record kinds, one per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    MenuItem,
    Reservation,
    Review,
    Newsletter,
}

impl RecordKind {
    /// Document collection holding records of this kind
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::MenuItem => "menuitem",
            Self::Reservation => "reservation",
            Self::Review => "review",
            Self::Newsletter => "newsletter",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::MenuItem => "menu item",
            Self::Reservation => "reservation",
            Self::Review => "review",
            Self::Newsletter => "newsletter signup",
        }
    }

    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MenuItem => ErrorCode::MenuItemInvalid,
            Self::Reservation => ErrorCode::ReservationInvalid,
            Self::Review => ErrorCode::ReviewInvalid,
            Self::Newsletter => ErrorCode::NewsletterInvalid,
        }
    }

    pub fn from_collection(name: &str) -> Option<Self> {
        match name {
            "menuitem" => Some(Self::MenuItem),
            "reservation" => Some(Self::Reservation),
            "review" => Some(Self::Review),
            "newsletter" => Some(Self::Newsletter),
            _ => None,
        }
    }
}

/// A typed record bound to its collection
pub trait Record: Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    const KIND: RecordKind;
    const SCHEMA: &'static [FieldSpec];
}

/// Payload rejected by validation
///
/// `fields` names every offending field, sorted. It is empty only when the
/// payload was not a JSON object at all.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: RecordKind,
    pub fields: Vec<String>,
    pub message: String,
}

impl ValidationError {
    fn not_an_object(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            message: format!("Invalid {}: payload must be a JSON object", kind.label()),
        }
    }

    fn from_problems(kind: RecordKind, mut problems: Vec<(String, String)>) -> Self {
        problems.sort();

        let mut fields: Vec<String> = problems.iter().map(|(field, _)| field.clone()).collect();
        fields.dedup();

        let reasons: Vec<String> = problems
            .iter()
            .map(|(field, reason)| format!("{field}: {reason}"))
            .collect();

        Self {
            kind,
            fields,
            message: format!("Invalid {}: {}", kind.label(), reasons.join("; ")),
        }
    }

    fn from_constraints(kind: RecordKind, errors: &validator::ValidationErrors) -> Self {
        let mut problems = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let reason = match &error.message {
                    Some(message) => message.to_string(),
                    None => describe_constraint(&error.code),
                };
                problems.push((field.to_string(), reason));
            }
        }
        Self::from_problems(kind, problems)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

fn describe_constraint(code: &str) -> String {
    match code {
        "range" => "value out of range".to_string(),
        "email" => "invalid email address".to_string(),
        "email_domain" => "email domain must contain a dot".to_string(),
        other => format!("failed {other} check"),
    }
}

/// Rejects addresses whose domain is a bare host such as `localhost`
///
/// Used next to the `email` rule, which accepts single-label domains.
pub(crate) fn dotted_email_domain(email: &str) -> Result<(), validator::ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };
    let mut labels = domain.split('.');
    let dotted = labels.clone().count() >= 2 && labels.all(|label| !label.is_empty());
    if dotted {
        Ok(())
    } else {
        Err(validator::ValidationError::new("email_domain"))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::with_message(err.kind.error_code(), err.message)
            .with_detail("record", err.kind.collection())
            .with_detail("fields", err.fields)
    }
}

/// A validated record of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidatedRecord {
    MenuItem(MenuItem),
    Reservation(Reservation),
    Review(Review),
    Newsletter(Newsletter),
}

impl ValidatedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::MenuItem(_) => RecordKind::MenuItem,
            Self::Reservation(_) => RecordKind::Reservation,
            Self::Review(_) => RecordKind::Review,
            Self::Newsletter(_) => RecordKind::Newsletter,
        }
    }
}

impl From<MenuItem> for ValidatedRecord {
    fn from(record: MenuItem) -> Self {
        Self::MenuItem(record)
    }
}

impl From<Reservation> for ValidatedRecord {
    fn from(record: Reservation) -> Self {
        Self::Reservation(record)
    }
}

impl From<Review> for ValidatedRecord {
    fn from(record: Review) -> Self {
        Self::Review(record)
    }
}

impl From<Newsletter> for ValidatedRecord {
    fn from(record: Newsletter) -> Self {
        Self::Newsletter(record)
    }
}

/// Validate an untyped payload into a typed record
pub fn validate_record<T: Record>(raw: Value) -> Result<T, ValidationError> {
    let kind = T::KIND;

    let Value::Object(mut obj) = raw else {
        return Err(ValidationError::not_an_object(kind));
    };

    let problems: Vec<(String, String)> = T::SCHEMA
        .iter()
        .filter_map(|spec| {
            spec.normalize(&mut obj)
                .map(|reason| (spec.name.to_string(), reason))
        })
        .collect();
    if !problems.is_empty() {
        return Err(ValidationError::from_problems(kind, problems));
    }

    let record: T = serde_json::from_value(Value::Object(obj)).map_err(|e| {
        ValidationError::from_problems(kind, vec![("payload".to_string(), e.to_string())])
    })?;

    record
        .validate()
        .map_err(|errors| ValidationError::from_constraints(kind, &errors))?;

    Ok(record)
}

/// Validate an untyped payload for a kind chosen at runtime
pub fn validate(kind: RecordKind, raw: Value) -> Result<ValidatedRecord, ValidationError> {
    match kind {
        RecordKind::MenuItem => validate_record::<MenuItem>(raw).map(ValidatedRecord::from),
        RecordKind::Reservation => validate_record::<Reservation>(raw).map(ValidatedRecord::from),
        RecordKind::Review => validate_record::<Review>(raw).map(ValidatedRecord::from),
        RecordKind::Newsletter => validate_record::<Newsletter>(raw).map(ValidatedRecord::from),
    }
}
