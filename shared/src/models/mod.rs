//! Data models
//!
//! One record type per document collection. Each type doubles as the
//! validated write payload and the response shape; store identifiers and
//! timestamps are never part of it.

pub mod menu_item;
pub mod newsletter;
pub mod reservation;
pub mod review;
pub mod schema;

// Re-exports
pub use menu_item::*;
pub use newsletter::*;
pub use reservation::*;
pub use review::*;
pub use schema::{
    FieldSpec, FieldType, Record, RecordKind, ValidatedRecord, ValidationError, validate,
    validate_record,
};
