//! Review API Handlers

use axum::{Json, extract::State};
use shared::models::Review;

use crate::api::{Ack, fallback};
use crate::core::ServerState;
use crate::utils::ValidatedJson;

/// Reviews returned at most
const RECENT_LIMIT: usize = 10;

/// GET /api/reviews - most recent reviews
///
/// Falls back to the sample reviews when the store fails or has none.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Review>> {
    match state.reviews().find_recent(RECENT_LIMIT).await {
        Ok(reviews) if !reviews.is_empty() => Json(reviews),
        Ok(_) => Json(fallback::sample_reviews()),
        Err(e) => {
            tracing::warn!(error = %e, "Reviews unavailable, serving sample reviews");
            Json(fallback::sample_reviews())
        }
    }
}

/// POST /api/reviews
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(review): ValidatedJson<Review>,
) -> Json<Ack> {
    if let Err(e) = state.reviews().create(&review).await {
        tracing::warn!(collection = "review", error = %e, "Review not persisted");
    }
    Json(Ack::OK)
}
