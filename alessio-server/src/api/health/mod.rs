//! Liveness and diagnostic routes
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | / | GET | liveness message |
//! | /test | GET | database diagnostic |
//!
//! # Diagnostic example
//!
//! ```json
//! {
//!   "backend": "✅ Running",
//!   "database": "✅ Connected & Working",
//!   "database_url": "✅ Set",
//!   "database_name": "✅ Set",
//!   "connection_status": "Connected",
//!   "collections": ["menuitem", "review"]
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Collections listed at most
const MAX_COLLECTIONS: usize = 10;
/// Characters of a store error shown in the diagnostic
const ERROR_PREVIEW_CHARS: usize = 50;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostic))
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
    backend: &'static str,
    database: String,
    database_url: Option<&'static str>,
    database_name: Option<&'static str>,
    connection_status: &'static str,
    collections: Vec<String>,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Alessio Restaurant API is running",
    })
}

fn set_marker(is_set: bool) -> Option<&'static str> {
    Some(if is_set { "✅ Set" } else { "❌ Not Set" })
}

/// GET /test - report store connectivity
async fn diagnostic(State(state): State<ServerState>) -> Json<DiagnosticResponse> {
    let mut response = DiagnosticResponse {
        backend: "✅ Running",
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    if !state.gateway.is_connected() {
        return Json(response);
    }

    response.database_url = set_marker(state.config.database_url.is_some());
    response.database_name = set_marker(state.config.database_name.is_some());
    response.connection_status = "Connected";

    match state.gateway.list_collections().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            response.collections = names;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            let preview: String = e.to_string().chars().take(ERROR_PREVIEW_CHARS).collect();
            tracing::warn!(error = %e, "Listing collections failed");
            response.database = format!("⚠️  Connected but Error: {preview}");
        }
    }

    Json(response)
}
