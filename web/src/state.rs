//! Application state for Axum handlers.

use std::sync::Arc;
use todo_core::TodoStore;
use tokio::sync::RwLock;

/// Application state shared across all HTTP handlers.
///
/// Holds the single authoritative [`TodoStore`] behind an `Arc<RwLock<..>>`.
/// Cloning the state is cheap (one `Arc` bump per request). The store is an
/// explicit dependency injected at router construction time, never ambient
/// global state — tests build a fresh state per test for isolation.
///
/// The lock serializes mutations; there is no cross-request transaction or
/// isolation guarantee beyond that, so two concurrent toggles on the same
/// id are last-write-wins.
#[derive(Clone)]
pub struct AppState {
    /// The authoritative item store.
    pub store: Arc<RwLock<TodoStore>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state around a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(TodoStore::new())
    }

    /// Create state around an existing store (useful for pre-seeded tests).
    #[must_use]
    pub fn with_store(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
