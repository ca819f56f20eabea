//! Access log middleware
//!
//! Emits one event per request once the response is ready. Requests that
//! end in an error status log at `warn`.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use http::{Method, StatusCode};
use std::time::Instant;
use tower_http::request_id::RequestId;

/// A finished request as it appears in the log
struct AccessLog<'a> {
    request_id: &'a str,
    method: &'a Method,
    route: &'a str,
    status: StatusCode,
    latency_ms: u64,
}

impl AccessLog<'_> {
    fn emit(&self) {
        let status = self.status.as_u16();
        if self.status.is_client_error() || self.status.is_server_error() {
            tracing::warn!(
                request_id = self.request_id,
                method = %self.method,
                route = self.route,
                status,
                latency_ms = self.latency_ms,
                "request failed"
            );
        } else {
            tracing::info!(
                request_id = self.request_id,
                method = %self.method,
                route = self.route,
                status,
                latency_ms = self.latency_ms,
                "request served"
            );
        }
    }
}

/// Logs method, matched route, status and latency of every request
///
/// Unmatched requests are logged under their raw path.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_owned();

    let response = next.run(req).await;

    AccessLog {
        request_id: &request_id,
        method: &method,
        route: &route,
        status: response.status(),
        latency_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    }
    .emit();

    response
}
