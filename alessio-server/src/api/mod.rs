//! HTTP API
//!
//! # Routes
//!
//! | Path | Method | Module |
//! |------|--------|--------|
//! | / | GET | health |
//! | /test | GET | health |
//! | /api/menu | GET | menu |
//! | /api/featured | GET | menu |
//! | /api/reviews | GET, POST | reviews |
//! | /api/newsletter | POST | newsletter |
//! | /api/reservations | POST | reservations |
//!
//! Read routes never fail on store errors, they substitute [`fallback`]
//! data. Write routes acknowledge with `{"ok": true}` once the payload is
//! valid, whatever the store does.

pub mod fallback;
pub mod health;
pub mod menu;
pub mod newsletter;
pub mod reservations;
pub mod reviews;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use serde::Serialize;
use shared::{AppError, ErrorCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Acknowledgement returned by every write route
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub const OK: Ack = Ack { ok: true };
}

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(reviews::router())
        .merge(newsletter::router())
        .merge(reservations::router())
        .fallback(not_found)
}

/// Build the application with all middleware
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - any origin, method and header, credentials allowed
        .layer(CorsLayer::very_permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Access log
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

async fn not_found() -> AppError {
    AppError::new(ErrorCode::NotFound)
}
