//! Menu API Handlers

use axum::{Json, extract::State};
use shared::models::MenuItem;

use crate::api::fallback;
use crate::core::ServerState;

/// Featured items returned at most
const FEATURED_LIMIT: usize = 8;

/// GET /api/menu - full menu, or the sample menu when the store fails
///
/// An empty menu from a healthy store is returned as is.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<MenuItem>> {
    match state.menu_items().find_all().await {
        Ok(items) => Json(items),
        Err(e) => {
            tracing::warn!(error = %e, "Menu unavailable, serving sample menu");
            Json(fallback::sample_menu())
        }
    }
}

/// GET /api/featured - featured items, or nothing when the store fails
pub async fn featured(State(state): State<ServerState>) -> Json<Vec<MenuItem>> {
    match state.menu_items().find_featured(FEATURED_LIMIT).await {
        Ok(items) => Json(items),
        Err(e) => {
            tracing::warn!(error = %e, "Featured items unavailable");
            Json(Vec::new())
        }
    }
}
