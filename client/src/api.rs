//! The HTTP sync layer.
//!
//! [`TodoApi`] translates each API operation into a single HTTP round trip
//! and normalizes every failure into a typed [`ApiError`]. There are no
//! timeouts, retries, or cancellation: each call either completes or
//! surfaces its error to the caller.

use crate::error::ApiError;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use todo_core::TodoItem;

/// Create request body: `{ "title": ... }`.
#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    title: &'a str,
}

/// Toggle request body: `{ "id": ..., "isCompleted": ... }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleRequest {
    id: u64,
    is_completed: bool,
}

/// Error body shape shared with the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: String,
    message: String,
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

/// Typed client for the todo API.
///
/// # Examples
///
/// ```ignore
/// let api = TodoApi::new("http://localhost:8080");
/// let created = api.create("Buy milk").await?;
/// let items = api.list().await?;
/// ```
#[derive(Clone)]
pub struct TodoApi {
    client: Client,
    base_url: String,
}

impl TodoApi {
    /// Create a new client for the given server base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch all todos.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unexpected statuses, or parse
    /// failures.
    pub async fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/todo"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<Vec<TodoItem>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            status => Err(Self::unexpected(status, response).await),
        }
    }

    /// Fetch a single todo by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, plus the usual
    /// network/decode failures.
    pub async fn get(&self, id: u64) -> Result<TodoItem, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/todo/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<TodoItem>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => Err(Self::unexpected(status, response).await),
        }
    }

    /// Create a todo with the given title.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the server rejects the title,
    /// plus the usual network/decode failures.
    pub async fn create(&self, title: &str) -> Result<TodoItem, ApiError> {
        let response = self
            .client
            .post(self.url("/api/todo"))
            .json(&CreateRequest { title })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::CREATED => response
                .json::<TodoItem>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            StatusCode::BAD_REQUEST => Err(Self::validation(response).await),
            status => Err(Self::unexpected(status, response).await),
        }
    }

    /// Toggle a todo, asserting the desired next completion value.
    ///
    /// The server derives the flip from its own state; `is_completed` here
    /// is the value this client expects to see afterwards. The returned
    /// item carries the server's authoritative result.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, `ApiError::Validation`
    /// for id-mismatch rejections, plus the usual network/decode failures.
    pub async fn toggle(&self, id: u64, is_completed: bool) -> Result<TodoItem, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/api/todo/{id}")))
            .json(&ToggleRequest { id, is_completed })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<TodoItem>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            StatusCode::BAD_REQUEST => Err(Self::validation(response).await),
            status => Err(Self::unexpected(status, response).await),
        }
    }

    /// Delete a todo. Succeeds whether or not the id existed.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or unexpected statuses.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/todo/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(Self::unexpected(status, response).await),
        }
    }

    /// Decode a 400 body into field-level validation messages.
    async fn validation(response: reqwest::Response) -> ApiError {
        match response.json::<ErrorBody>().await {
            Ok(body) => {
                let mut messages: Vec<String> =
                    body.errors.into_values().flatten().collect();
                if messages.is_empty() {
                    messages.push(body.message);
                }
                ApiError::Validation { messages }
            }
            Err(e) => ApiError::Decode(e.to_string()),
        }
    }

    async fn unexpected(status: StatusCode, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        ApiError::Unexpected {
            status: status.as_u16(),
            body,
        }
    }
}
