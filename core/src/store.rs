//! The in-memory item store.
//!
//! [`TodoStore`] is the authoritative collection of todo records for one
//! process lifetime. It is a plain owned value: callers decide how to share
//! it (the web layer wraps one in `Arc<RwLock<..>>`), which keeps tests
//! isolated — every test constructs its own fresh store.
//!
//! All operations are synchronous and total: a missing id is reported
//! through `Option`/`bool`, never through an error.

use crate::item::TodoItem;
use std::collections::BTreeMap;

/// Ordered, in-memory collection of todo items with monotonic id assignment.
///
/// Ids start at 1 and strictly increase for the lifetime of the store, even
/// across deletes — an id is never reused. Because keys only ever grow,
/// `BTreeMap` iteration order is exactly insertion order, which is the
/// order `list` must present.
///
/// # Examples
///
/// ```
/// use todo_core::TodoStore;
///
/// let mut store = TodoStore::new();
/// let item = store.create("Buy milk".to_string());
/// assert_eq!(item.id, 1);
/// assert_eq!(store.list().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TodoStore {
    items: BTreeMap<u64, TodoItem>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Creates an empty store. The first created item receives id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Returns all items in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<TodoItem> {
        self.items.values().cloned().collect()
    }

    /// Creates a new item with the next id and stores it.
    ///
    /// The title is stored as given; validation happens before this call
    /// (see [`crate::validation::validate_title`]).
    pub fn create(&mut self, title: String) -> TodoItem {
        let id = self.next_id;
        self.next_id += 1;
        let item = TodoItem::new(id, title);
        self.items.insert(id, item.clone());
        item
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn find(&self, id: u64) -> Option<&TodoItem> {
        self.items.get(&id)
    }

    /// Flips the completion flag of the item with the given id.
    ///
    /// Returns the updated item, or `None` if the id is unknown.
    pub fn toggle(&mut self, id: u64) -> Option<TodoItem> {
        let item = self.items.get_mut(&id)?;
        item.toggle();
        Some(item.clone())
    }

    /// Removes the item with the given id.
    ///
    /// Returns `true` if a record was removed. Deleting an unknown id is a
    /// no-op that returns `false`; callers treat the operation as
    /// idempotent either way.
    pub fn delete(&mut self, id: u64) -> bool {
        self.items.remove(&id).is_some()
    }

    /// Returns the number of stored items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Checks whether an item with the given id exists.
    #[must_use]
    pub fn exists(&self, id: u64) -> bool {
        self.items.contains_key(&id)
    }
}
