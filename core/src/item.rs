//! The todo item domain type.
//!
//! A todo item is the smallest possible record: a numeric id, a title, and
//! a completion flag. Field names are snake_case in Rust and camelCase on
//! the wire (`isCompleted`), matching the JSON contract shared with the
//! client.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// Invariants upheld by the rest of the crate:
/// - `id` is assigned once by [`TodoStore::create`](crate::store::TodoStore::create)
///   and never changes.
/// - `title` has already passed [`validate_title`](crate::validation::validate_title)
///   (1–100 characters after sanitization).
/// - only `is_completed` is ever mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, assigned by the store on creation.
    pub id: u64,
    /// Sanitized title, never empty.
    pub title: String,
    /// Whether the todo is completed.
    pub is_completed: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-completed todo item.
    #[must_use]
    pub const fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            is_completed: false,
        }
    }

    /// Flips the completion flag, leaving every other field untouched.
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
