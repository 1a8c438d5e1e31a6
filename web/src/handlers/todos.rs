//! Todo API endpoints.
//!
//! The mutation surface of the service:
//! - `GET    /api/todo` - List all todos
//! - `GET    /api/todo/:id` - Get a single todo
//! - `POST   /api/todo` - Create a todo
//! - `PUT    /api/todo/:id` - Toggle a todo's completion flag
//! - `DELETE /api/todo/:id` - Delete a todo (idempotent)
//!
//! Server-side validation here is authoritative; whatever the client did
//! before sending is advisory only.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use todo_core::{validate_title, TodoItem};

// ============================================================================
// Request Types
// ============================================================================

/// Request to create a new todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Raw title as typed by the user; sanitized and validated here.
    pub title: String,
}

/// Request to toggle a todo.
///
/// The body carries the client's view of the next completion value, but the
/// server derives the flip from its own state and only logs a mismatch
/// (see the module docs on `update_todo`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    /// Id of the todo to toggle; must match the path id.
    pub id: u64,
    /// The completion value the client expects after the toggle.
    pub is_completed: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all todos in insertion order.
///
/// # Endpoint
///
/// ```text
/// GET /api/todo
/// ```
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    let store = state.store.read().await;
    Json(store.list())
}

/// Get a single todo by id.
///
/// # Endpoint
///
/// ```text
/// GET /api/todo/:id
/// ```
///
/// # Errors
///
/// Returns 404 when the id is unknown.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TodoItem>, AppError> {
    let store = state.store.read().await;
    let item = store
        .find(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Todo", id))?;
    Ok(Json(item))
}

/// Create a new todo.
///
/// The title is sanitized (HTML-tag strip + trim) and length-checked before
/// the store assigns an id.
///
/// # Endpoint
///
/// ```text
/// POST /api/todo
/// ```
///
/// # Errors
///
/// Returns 400 with field-level messages when the sanitized title is empty
/// or longer than 100 characters.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoItem>), AppError> {
    let title = validate_title(&request.title)?;

    let mut store = state.store.write().await;
    let item = store.create(title);
    tracing::info!(id = item.id, "Todo created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Toggle a todo's completion flag.
///
/// The server flips its own stored value rather than applying the
/// client-sent `isCompleted`; a stale client therefore cannot overwrite a
/// toggle it never saw. When the requested value disagrees with the flip
/// result, the mismatch is logged and the server's result wins.
///
/// # Endpoint
///
/// ```text
/// PUT /api/todo/:id
/// ```
///
/// # Errors
///
/// Returns 400 when the body id does not match the path id, 404 when the
/// id is unknown.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<TodoItem>, AppError> {
    if request.id != id {
        return Err(AppError::bad_request("Body id must match path id"));
    }

    let mut store = state.store.write().await;
    let item = store
        .toggle(id)
        .ok_or_else(|| AppError::not_found("Todo", id))?;

    if item.is_completed != request.is_completed {
        tracing::warn!(
            id,
            requested = request.is_completed,
            actual = item.is_completed,
            "Toggle request was stale; server state wins"
        );
    }
    tracing::info!(id, is_completed = item.is_completed, "Todo toggled");

    Ok(Json(item))
}

/// Delete a todo.
///
/// Idempotent: deleting an unknown id is still a 204.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/todo/:id
/// ```
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut store = state.store.write().await;
    if store.delete(id) {
        tracing::info!(id, "Todo deleted");
    } else {
        tracing::debug!(id, "Delete for unknown id; treated as success");
    }
    StatusCode::NO_CONTENT
}
