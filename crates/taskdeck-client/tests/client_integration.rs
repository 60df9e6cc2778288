//! Integration tests for TaskClient using wiremock.
//!
//! These tests verify the client behavior against a mock HTTP server.

use taskdeck_client::{
    Category, ClientError, Priority, TaskClient, TaskCreateRequest, TaskUpdateRequest,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a task JSON body the way the backend does.
fn task_json(id: &str, text: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "text": text,
        "completed": completed,
        "createdAt": "2026-08-30T12:00:00Z"
    })
}

#[tokio::test]
async fn test_list_tasks_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json("1", "First task", false),
            task_json("2", "Second task", true),
        ])))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let tasks = client.list_tasks().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "1");
    assert_eq!(tasks[0].text, "First task");
    assert!(!tasks[0].completed);
    assert_eq!(tasks[1].id, "2");
    assert!(tasks[1].completed);
}

#[tokio::test]
async fn test_list_tasks_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let tasks = client.list_tasks().await.unwrap();

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_list_tasks_failure_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let err = client.list_tasks().await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch tasks");
}

#[tokio::test]
async fn test_create_task_bare_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(serde_json::json!({"text": "New task"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json("new-id", "New task", false)))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let task = client.create_task(&TaskCreateRequest::new("New task")).await.unwrap();

    assert_eq!(task.id, "new-id");
    assert_eq!(task.text, "New task");
    assert!(!task.completed);
}

#[tokio::test]
async fn test_create_task_with_flagged_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(serde_json::json!({
            "text": "Buy milk",
            "priority": "high",
            "category": "shopping"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "9",
            "text": "Buy milk",
            "completed": false,
            "createdAt": "2026-08-30T12:00:00Z",
            "priority": "high",
            "category": "shopping"
        })))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let task = client
        .create_task(&TaskCreateRequest {
            text: "Buy milk".to_string(),
            priority: Some(Priority::High),
            category: Some(Category::Shopping),
        })
        .await
        .unwrap();

    assert_eq!(task.priority, Some(Priority::High));
    assert_eq!(task.category, Some(Category::Shopping));
}

#[tokio::test]
async fn test_create_task_failure_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let err = client.create_task(&TaskCreateRequest::new("x")).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to add task");
}

#[tokio::test]
async fn test_update_task_sends_partial_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/abc123"))
        .and(body_json(serde_json::json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("abc123", "Task", true)))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let task = client
        .update_task("abc123", &TaskUpdateRequest::completed(true))
        .await
        .unwrap();

    assert!(task.completed);
}

#[tokio::test]
async fn test_update_task_text_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/abc123"))
        .and(body_json(serde_json::json!({"text": "Edited"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("abc123", "Edited", false)))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let task = client
        .update_task("abc123", &TaskUpdateRequest::text("Edited"))
        .await
        .unwrap();

    assert_eq!(task.text, "Edited");
}

#[tokio::test]
async fn test_update_task_failure_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/tasks/abc123"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let err = client
        .update_task("abc123", &TaskUpdateRequest::completed(true))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to update task");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_delete_task_success_204() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/abc123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    assert!(client.delete_task("abc123").await.is_ok());
}

#[tokio::test]
async fn test_delete_task_success_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/abc123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    assert!(client.delete_task("abc123").await.is_ok());
}

#[tokio::test]
async fn test_delete_task_failure_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let err = client.delete_task("ghost").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to delete task");
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Port 9 (discard) is not listening.
    let client = TaskClient::new("http://127.0.0.1:9").unwrap();
    let err = client.list_tasks().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.user_message().contains("Network error"));
}

#[tokio::test]
async fn test_legacy_tasks_in_listing() {
    // A mixed listing: one record with metadata, one legacy record.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "1",
                "text": "Modern",
                "completed": false,
                "createdAt": "2026-08-30T12:00:00Z",
                "priority": "low",
                "category": "personal"
            },
            task_json("2", "Legacy", false),
        ])))
        .mount(&mock_server)
        .await;

    let client = TaskClient::new(&mock_server.uri()).unwrap();
    let tasks = client.list_tasks().await.unwrap();

    assert_eq!(tasks[0].priority, Some(Priority::Low));
    assert_eq!(tasks[1].priority, None);
    assert_eq!(tasks[1].priority_or_default(), Priority::Medium);
}
