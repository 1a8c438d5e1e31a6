//! Axum HTTP surface for the todo list service.
//!
//! This crate is the imperative shell around `todo-core`: it parses
//! requests, runs the authoritative validation, mutates the shared store,
//! and maps domain outcomes to HTTP responses.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from the request (path id, JSON body)
//! 3. **Validate** (title policy, path/body id match)
//! 4. **Mutate** the shared [`TodoStore`](todo_core::TodoStore) under its lock
//! 5. **Map result** to an HTTP response (`201`/`200`/`204`, or a
//!    structured error body)
//!
//! # Example
//!
//! ```ignore
//! use todo_web::{build_router, AppState};
//!
//! let app = build_router(AppState::new());
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use middleware::{request_id_layer, REQUEST_ID_HEADER};
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
