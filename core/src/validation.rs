//! Title validation policy.
//!
//! Validation is applied twice in the system: authoritatively by the server
//! before mutating the store, and in advisory form by the client before
//! issuing a request. Both sides call the same two functions so the
//! definitions cannot drift.
//!
//! Sanitization strips HTML-tag-like substrings (`<...>`) and surrounding
//! whitespace. It is a UX measure against accidental markup, not an XSS
//! defense — the server treats titles as opaque text.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum title length after sanitization, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

#[allow(clippy::expect_used)] // pattern is a literal; compilation cannot fail
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Reasons a title can be rejected.
///
/// The `Display` messages are user-facing and go out verbatim in
/// field-level error responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty (or whitespace/tags only) after sanitization.
    #[error("Title cannot be empty.")]
    EmptyTitle,

    /// Title exceeds [`TITLE_MAX_CHARS`] characters after sanitization.
    #[error("Title cannot be longer than {TITLE_MAX_CHARS} characters.")]
    TitleTooLong,
}

impl ValidationError {
    /// The field this error applies to. The data model has a single
    /// validated field, so this is currently always `"title"`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        "title"
    }
}

/// Strips HTML-tag-like substrings, then trims surrounding whitespace.
///
/// # Examples
///
/// ```
/// use todo_core::sanitize;
///
/// assert_eq!(sanitize("<b>Buy milk</b>"), "Buy milk");
/// assert_eq!(sanitize("  Walk dog  "), "Walk dog");
/// ```
#[must_use]
pub fn sanitize(input: &str) -> String {
    TAG_PATTERN.replace_all(input, "").trim().to_string()
}

/// Sanitizes a title and checks the length policy.
///
/// On success returns the sanitized title, which is what gets stored.
/// Length is measured in characters, not bytes, so multi-byte titles are
/// not penalized.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTitle`] when nothing remains after
/// sanitization, [`ValidationError::TitleTooLong`] when more than
/// [`TITLE_MAX_CHARS`] characters remain.
pub fn validate_title(input: &str) -> Result<String, ValidationError> {
    let title = sanitize(input);
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(title)
}
