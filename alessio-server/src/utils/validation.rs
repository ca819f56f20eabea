//! Validated JSON request bodies

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;
use shared::models::{Record, validate_record};
use shared::AppError;

/// JSON body validated against the schema of `T`
///
/// Malformed JSON is rejected with `InvalidRequest`; schema and constraint
/// violations with the record's own error code. Both are 400 responses, and
/// the handler never runs.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Record,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;

        let raw: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::invalid_request(format!("Invalid JSON body: {e}")))?;

        Ok(Self(validate_record::<T>(raw)?))
    }
}
