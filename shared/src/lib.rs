//! Shared types for the Alessio restaurant backend
//!
//! Record models and their validation rules, the unified error system,
//! and small utilities used by the server crate and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, ErrorCode};
pub use models::{
    MenuItem, Newsletter, Record, RecordKind, Reservation, Review, ValidatedRecord,
    ValidationError, validate, validate_record,
};
