//! Unified error system for the Alessio backend
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Which part of the API rejected a request
//! - [`AppError`]: Error type with code, message and details
//! - [`ApiResponse`]: JSON envelope returned on failure
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (routing, malformed bodies)
//! - 1xxx: Content errors (menu, reviews)
//! - 2xxx: Lead capture errors (reservations, newsletter)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::ReviewInvalid, "rating is out of range")
//!     .with_detail("fields", vec!["rating"]);
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 1002);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError};
