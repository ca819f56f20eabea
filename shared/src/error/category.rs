//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Which part of the API rejected the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Routing and body parsing (0xxx)
    General,
    /// Menu and review payloads (1xxx)
    Content,
    /// Reservation and newsletter payloads (2xxx)
    Leads,
}

impl ErrorCategory {
    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Content => "content",
            Self::Leads => "leads",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound | Self::InvalidRequest => ErrorCategory::General,
            Self::MenuItemInvalid | Self::ReviewInvalid => ErrorCategory::Content,
            Self::ReservationInvalid | Self::NewsletterInvalid => ErrorCategory::Leads,
        }
    }
}
