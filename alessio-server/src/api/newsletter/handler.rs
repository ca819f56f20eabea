//! Newsletter API Handlers

use axum::{Json, extract::State};
use shared::models::Newsletter;

use crate::api::Ack;
use crate::core::ServerState;
use crate::utils::ValidatedJson;

/// POST /api/newsletter - acknowledged even if the signup is not stored
pub async fn subscribe(
    State(state): State<ServerState>,
    ValidatedJson(signup): ValidatedJson<Newsletter>,
) -> Json<Ack> {
    if let Err(e) = state.newsletter().create(&signup).await {
        tracing::warn!(collection = "newsletter", error = %e, "Newsletter signup not persisted");
    }
    Json(Ack::OK)
}
