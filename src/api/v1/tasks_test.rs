//! Integration tests for task API endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::files::Workspace;
use crate::store::MemoryTaskStore;

fn test_app() -> axum::Router {
    let state = AppState::new(
        MemoryTaskStore::with_sample_tasks(),
        Workspace::new(std::env::temp_dir()),
        3000,
        std::time::Instant::now(),
    );
    routes::create_router(state)
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_returns_seeded_tasks() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Retrieved 2 tasks");

    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], "1");
    assert_eq!(tasks[0]["completed"], true);
    assert_eq!(tasks[1]["title"], "Implement MCP Server");
    assert!(tasks[1]["createdAt"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_returns_created() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/tasks",
            json!({"title": "Write docs", "description": "Document the endpoints"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Task created successfully");
    assert_eq!(body["data"]["title"], "Write docs");
    assert_eq!(body["data"]["completed"], false);

    // New task shows up in the listing
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_without_fields_is_bad_request() {
    let app = test_app();

    let response = app
        .oneshot(json_request("POST", "/api/v1/tasks", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Title and description are required");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_task_returns_single_task() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/tasks/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Task retrieved successfully");
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["title"], "Setup API Server");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_task_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/tasks/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Task not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_task_applies_only_present_fields() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/tasks/2",
            json!({"completed": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Task updated successfully");
    assert_eq!(body["data"]["completed"], true);
    assert_eq!(body["data"]["title"], "Implement MCP Server");

    // Explicit empty string counts as present and is applied
    let response = app
        .oneshot(json_request("PUT", "/api/v1/tasks/2", json!({"title": ""})))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["data"]["title"], "");
    assert_eq!(body["data"]["completed"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_empty_body_changes_nothing_visible() {
    let app = test_app();

    let response = app
        .oneshot(json_request("PUT", "/api/v1/tasks/1", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["title"], "Setup API Server");
    assert_eq!(
        body["data"]["description"],
        "Create HTTP API endpoints for task management"
    );
    assert_eq!(body["data"]["completed"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_task_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/v1/tasks/999",
            json!({"title": "Ghost"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Task not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_task_returns_deleted_record() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/tasks/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Task deleted successfully");
    assert_eq!(body["data"]["id"], "2");

    // Only the first seeded task remains
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response).await;
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], "1");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_task_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/tasks/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Task not found");
}
