//! Utilities - logging setup and request extractors

pub mod logger;
pub mod validation;

pub use validation::ValidatedJson;
