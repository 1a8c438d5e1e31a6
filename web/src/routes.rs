//! Router configuration for the todo service.
//!
//! Builds the complete Axum router with all endpoints.

use crate::handlers::health::health_check;
use crate::handlers::todos;
use crate::middleware::request_id_layer;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Configures:
/// - Health check (outside the `/api` prefix, no tracing noise)
/// - Todo CRUD endpoints under `/api`
/// - Request id + HTTP trace layers
///
/// # Arguments
///
/// - `state`: Application state to share with handlers; pass a fresh
///   [`AppState`] per test for isolation.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/todo", get(todos::list_todos))
        .route("/todo", post(todos::create_todo))
        .route("/todo/:id", get(todos::get_todo))
        .route("/todo/:id", put(todos::update_todo))
        .route("/todo/:id", delete(todos::delete_todo));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
