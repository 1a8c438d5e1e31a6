//! Domain core for the todo list service.
//!
//! This crate is the functional core of the application: the `TodoItem`
//! domain type, the in-memory [`TodoStore`], and the title validation
//! policy. It performs no I/O and knows nothing about HTTP — the `todo-web`
//! and `todo-client` crates are the imperative shells around it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Imperative Shells                  │
//! │  - todo-web  (axum handlers)            │  ← HTTP, JSON, logging
//! │  - todo-client (reqwest sync layer)     │  ← re-fetch protocol
//! ├─────────────────────────────────────────┤
//! │      Functional Core (this crate)       │
//! │  - TodoItem                             │  ← wire-shape domain type
//! │  - TodoStore                            │  ← ordered, monotonic ids
//! │  - validation                           │  ← sanitize + length policy
//! └─────────────────────────────────────────┘
//! ```
//!
//! Both shells share the same validation policy: the server applies it
//! authoritatively, the client applies it in advisory form before sending.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod item;
pub mod store;
pub mod validation;

// Re-export key types for convenience
pub use item::TodoItem;
pub use store::TodoStore;
pub use validation::{sanitize, validate_title, ValidationError, TITLE_MAX_CHARS};
