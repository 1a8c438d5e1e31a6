//! Tests for the sync layer and the view state controller.
//!
//! The server side is simulated with wiremock, so these tests pin down the
//! exact wire shapes the client emits and the way failures surface in the
//! controller.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect

use serde_json::json;
use todo_client::{ApiError, TodoApi, TodoList};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn item_json(id: u64, title: &str, completed: bool) -> serde_json::Value {
    json!({ "id": id, "title": title, "isCompleted": completed })
}

// ============================================================================
// Sync layer (TodoApi)
// ============================================================================

#[tokio::test]
async fn list_decodes_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json(1, "Buy milk", false)])),
        )
        .mount(&server)
        .await;

    let api = TodoApi::new(server.uri());
    let items = api.list().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].title, "Buy milk");
    assert!(!items[0].is_completed);
}

#[tokio::test]
async fn create_sends_title_and_decodes_created_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/todo"))
        .and(body_json(json!({ "title": "Buy milk" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(item_json(1, "Buy milk", false)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = TodoApi::new(server.uri());
    let created = api.create("Buy milk").await.unwrap();
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn create_decodes_field_level_validation_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/todo"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "VALIDATION_ERROR",
            "message": "One or more validation errors occurred.",
            "errors": { "title": ["Title cannot be empty."] }
        })))
        .mount(&server)
        .await;

    let api = TodoApi::new(server.uri());
    let err = api.create("").await.unwrap_err();

    match err {
        ApiError::Validation { messages } => {
            assert_eq!(messages, vec!["Title cannot be empty.".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn toggle_sends_the_desired_next_value() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/todo/1"))
        .and(body_json(json!({ "id": 1, "isCompleted": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json(1, "Buy milk", true)))
        .expect(1)
        .mount(&server)
        .await;

    let api = TodoApi::new(server.uri());
    let toggled = api.toggle(1, true).await.unwrap();
    assert!(toggled.is_completed);
}

#[tokio::test]
async fn toggle_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/todo/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NOT_FOUND",
            "message": "Todo with id 42 not found"
        })))
        .mount(&server)
        .await;

    let api = TodoApi::new(server.uri());
    assert!(matches!(
        api.toggle(42, true).await.unwrap_err(),
        ApiError::NotFound
    ));
}

#[tokio::test]
async fn delete_accepts_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/todo/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = TodoApi::new(server.uri());
    api.delete(1).await.unwrap();
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on port 1.
    let api = TodoApi::new("http://127.0.0.1:1");
    assert!(matches!(api.list().await.unwrap_err(), ApiError::Network(_)));
}

// ============================================================================
// View state controller (TodoList)
// ============================================================================

#[tokio::test]
async fn refresh_replaces_the_mirror_and_clears_the_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json(1, "Buy milk", false)])),
        )
        .mount(&server)
        .await;

    let mut list = TodoList::new(TodoApi::new(server.uri()));
    list.refresh().await;

    assert_eq!(list.count(), 1);
    assert_eq!(list.completed_count(), 0);
    assert!(list.last_error().is_none());
    assert!(!list.is_pending());
}

#[tokio::test]
async fn create_re_fetches_after_the_mutation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/todo"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(item_json(1, "Buy milk", false)),
        )
        .expect(1)
        .mount(&server)
        .await;
    // The controller must follow the mutation with a full list fetch.
    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json(1, "Buy milk", false)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut list = TodoList::new(TodoApi::new(server.uri()));
    list.create("Buy milk").await;

    assert_eq!(list.count(), 1);
    assert!(list.last_error().is_none());
}

#[tokio::test]
async fn advisory_validation_blocks_the_request_entirely() {
    let server = MockServer::start().await;
    // No POST may reach the server for a locally rejected title.
    Mock::given(method("POST"))
        .and(path("/api/todo"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut list = TodoList::new(TodoApi::new(server.uri()));
    list.create("   ").await;

    assert_eq!(list.last_error(), Some("Title cannot be empty."));
    assert_eq!(list.count(), 0);
}

#[tokio::test]
async fn toggle_requests_the_negation_of_the_displayed_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json(1, "Buy milk", false)])),
        )
        .mount(&server)
        .await;
    // Displayed value is false, so the desired next value must be true.
    Mock::given(method("PUT"))
        .and(path("/api/todo/1"))
        .and(body_json(json!({ "id": 1, "isCompleted": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json(1, "Buy milk", true)))
        .expect(1)
        .mount(&server)
        .await;

    let mut list = TodoList::new(TodoApi::new(server.uri()));
    list.refresh().await;
    list.toggle(1).await;

    assert!(list.last_error().is_none());
}

#[tokio::test]
async fn failed_mutation_keeps_the_stale_list_and_surfaces_the_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json(1, "Buy milk", false)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/todo/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NOT_FOUND",
            "message": "Todo with id 1 not found"
        })))
        .mount(&server)
        .await;

    let mut list = TodoList::new(TodoApi::new(server.uri()));
    list.refresh().await;
    list.toggle(1).await;

    // Stale mirror stays; error is visible.
    assert_eq!(list.count(), 1);
    assert_eq!(list.last_error(), Some("Todo not found"));
}

#[tokio::test]
async fn toggling_an_item_not_in_the_mirror_is_a_local_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut list = TodoList::new(TodoApi::new(server.uri()));
    list.toggle(7).await;

    assert_eq!(list.last_error(), Some("Todo 7 is not in the list"));
}
