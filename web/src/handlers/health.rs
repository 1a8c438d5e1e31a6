//! Health check endpoint.
//!
//! Used by load balancers and monitoring systems to verify the service
//! is running.

use axum::http::StatusCode;

/// Simple health check endpoint (liveness).
///
/// Returns 200 OK to indicate the service is running. The store is
/// in-memory, so there are no dependencies to probe.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
