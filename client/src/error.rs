//! Error types for the todo API client.

use thiserror::Error;

/// Errors that can occur when talking to the todo API.
///
/// Every service-call failure is normalized into one of these variants so
/// the view layer has a single message to surface; there is no retry or
/// partial-failure recovery behind any of them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; no HTTP status code was received
    #[error("Network error: {0}")]
    Network(String),

    /// Server rejected the request with field-level validation messages
    #[error("Validation failed: {}", messages.join(" "))]
    Validation {
        /// Field messages as sent by the server
        messages: Vec<String>,
    },

    /// The referenced todo does not exist on the server
    #[error("Todo not found")]
    NotFound,

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// Server returned a status this client has no mapping for
    #[error("Unexpected response (status {status}): {body}")]
    Unexpected {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_field_messages() {
        let err = ApiError::Validation {
            messages: vec![
                "Title cannot be empty.".to_string(),
                "Try again.".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Validation failed: Title cannot be empty. Try again."
        );
    }

    #[test]
    fn network_errors_carry_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
