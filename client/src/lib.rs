//! Client for the todo list service.
//!
//! Two layers, splitting transport from view state:
//!
//! - [`TodoApi`] — the sync layer: one HTTP round trip per operation,
//!   failures normalized into typed [`ApiError`]s.
//! - [`TodoList`] — the view state controller: the local mirror of the
//!   server list, re-synchronized by a full re-fetch after every mutation,
//!   with the last error kept for display.
//!
//! There is no optimistic update, cancellation, debouncing, or retry: each
//! mutation blocks until the round trip (plus the re-fetch) completes.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod controller;
pub mod error;

// Re-export key types for convenience
pub use api::TodoApi;
pub use controller::{SyncPhase, TodoList};
pub use error::ApiError;
