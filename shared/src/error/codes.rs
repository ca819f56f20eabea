//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General request errors
//! - 1xxx: Content errors
//! - 2xxx: Lead capture errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire. Store failures never reach
/// clients, so there are no system codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// No route for the path
    NotFound = 3,
    /// Body is not parseable JSON
    InvalidRequest = 5,

    // ==================== 1xxx: Content ====================
    /// Menu item is invalid
    MenuItemInvalid = 1001,
    /// Review is invalid
    ReviewInvalid = 1002,

    // ==================== 2xxx: Leads ====================
    /// Reservation is invalid
    ReservationInvalid = 2001,
    /// Newsletter signup is invalid
    NewsletterInvalid = 2002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::MenuItemInvalid => "Menu item is invalid",
            ErrorCode::ReviewInvalid => "Review is invalid",
            ErrorCode::ReservationInvalid => "Reservation is invalid",
            ErrorCode::NewsletterInvalid => "Newsletter signup is invalid",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            1001 => Ok(ErrorCode::MenuItemInvalid),
            1002 => Ok(ErrorCode::ReviewInvalid),
            2001 => Ok(ErrorCode::ReservationInvalid),
            2002 => Ok(ErrorCode::NewsletterInvalid),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
