//! Integration tests for the tool catalog and invocation endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::files::Workspace;
use crate::store::MemoryTaskStore;

fn test_app() -> (TempDir, axum::Router) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("readme.md"), "# TaskDeck\n").unwrap();

    let state = AppState::new(
        MemoryTaskStore::with_sample_tasks(),
        Workspace::new(dir.path()),
        3000,
        std::time::Instant::now(),
    );
    (dir, routes::create_router(state))
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn call_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/tools/call")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn list_tools_returns_catalog() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/tools")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Retrieved 7 tools");

    let tools = body["data"].as_array().unwrap();
    assert_eq!(tools.len(), 7);
    assert_eq!(tools[0]["name"], "list_tasks");
    for tool in tools {
        assert_eq!(tool["parameters"]["type"], "object");
        assert!(tool["description"].is_string());
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn call_without_parameters_runs_zero_arg_tools() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(call_request(json!({"toolName": "list_tasks"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Tool executed successfully");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn tool_calls_share_the_store_with_the_rest_api() {
    let (_dir, app) = test_app();

    let response = app
        .clone()
        .oneshot(call_request(json!({
            "toolName": "create_task",
            "parameters": {"title": "From the console", "description": "Created through a tool call"}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["title"], "From the console");

    // The REST surface sees the task created through the tool surface
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
async fn call_reads_workspace_files() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(call_request(json!({
            "toolName": "read_file",
            "parameters": {"path": "readme.md"}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["content"], "# TaskDeck\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn call_without_tool_name_is_bad_request() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(call_request(json!({"parameters": {}})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Tool name is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn call_unknown_tool_is_bad_request() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(call_request(json!({"toolName": "frobnicate"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Unknown tool: frobnicate");
}

#[tokio::test(flavor = "multi_thread")]
async fn call_with_invalid_parameters_is_bad_request() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(call_request(json!({"toolName": "update_task", "parameters": {}})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Task ID is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn call_against_missing_task_is_not_found() {
    let (_dir, app) = test_app();

    let response = app
        .oneshot(call_request(json!({
            "toolName": "delete_task",
            "parameters": {"id": "missing"}
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Task with id 'missing' not found");
}
