//! The view state controller.
//!
//! [`TodoList`] holds the client's in-memory mirror of the server's store
//! plus the last user-visible error. It follows the per-operation state
//! machine: `Idle → Pending → { success: re-fetch list, clear error |
//! failure: keep stale list, surface error }`.
//!
//! After every successful mutation the controller re-fetches the full list
//! rather than patching locally. That costs a second round trip but
//! guarantees the mirror matches the server's authoritative state after
//! any single-user sequence of actions.

use crate::api::TodoApi;
use crate::error::ApiError;
use todo_core::{validate_title, TodoItem};

/// Whether a request is currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    /// No request in flight.
    Idle,
    /// A request is in flight; the UI blocks further mutations.
    Pending,
}

/// Client-side mirror of the todo list.
///
/// # Examples
///
/// ```ignore
/// let mut list = TodoList::new(TodoApi::new("http://localhost:8080"));
/// list.refresh().await;
/// list.create("Buy milk").await;
/// assert_eq!(list.items().len(), 1);
/// ```
pub struct TodoList {
    api: TodoApi,
    items: Vec<TodoItem>,
    last_error: Option<String>,
    phase: SyncPhase,
}

impl TodoList {
    /// Create an empty mirror backed by the given API client.
    ///
    /// The mirror starts empty; call [`refresh`](Self::refresh) to load the
    /// server's current list.
    #[must_use]
    pub const fn new(api: TodoApi) -> Self {
        Self {
            api,
            items: Vec::new(),
            last_error: None,
            phase: SyncPhase::Idle,
        }
    }

    /// The currently displayed items (possibly stale after a failure).
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The last surfaced error message, cleared by any successful operation.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, SyncPhase::Pending)
    }

    /// Number of displayed items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of displayed items that are completed.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_completed).count()
    }

    /// Re-fetch the full list from the server.
    ///
    /// On success the mirror is replaced and the error cleared; on failure
    /// the mirror stays as it was and the error is surfaced.
    pub async fn refresh(&mut self) {
        self.phase = SyncPhase::Pending;
        match self.api.list().await {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
            }
            Err(e) => self.surface(&e),
        }
        self.phase = SyncPhase::Idle;
    }

    /// Create a todo.
    ///
    /// Client-side validation runs first as a UX measure; a locally
    /// rejected title surfaces its message without any HTTP traffic. The
    /// server re-validates authoritatively either way.
    pub async fn create(&mut self, title: &str) {
        let sanitized = match validate_title(title) {
            Ok(t) => t,
            Err(e) => {
                self.last_error = Some(e.to_string());
                return;
            }
        };

        self.phase = SyncPhase::Pending;
        match self.api.create(&sanitized).await {
            Ok(_) => self.resync().await,
            Err(e) => self.surface(&e),
        }
        self.phase = SyncPhase::Idle;
    }

    /// Toggle a displayed todo, requesting the negation of what the mirror
    /// currently shows.
    pub async fn toggle(&mut self, id: u64) {
        let Some(displayed) = self.items.iter().find(|i| i.id == id) else {
            self.last_error = Some(format!("Todo {id} is not in the list"));
            return;
        };
        let desired = !displayed.is_completed;

        self.phase = SyncPhase::Pending;
        match self.api.toggle(id, desired).await {
            Ok(_) => self.resync().await,
            Err(e) => self.surface(&e),
        }
        self.phase = SyncPhase::Idle;
    }

    /// Delete a todo.
    pub async fn delete(&mut self, id: u64) {
        self.phase = SyncPhase::Pending;
        match self.api.delete(id).await {
            Ok(()) => self.resync().await,
            Err(e) => self.surface(&e),
        }
        self.phase = SyncPhase::Idle;
    }

    /// Full re-fetch after a successful mutation.
    async fn resync(&mut self) {
        match self.api.list().await {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
            }
            Err(e) => self.surface(&e),
        }
    }

    fn surface(&mut self, error: &ApiError) {
        tracing::debug!(%error, "Todo operation failed");
        self.last_error = Some(error.to_string());
    }
}
