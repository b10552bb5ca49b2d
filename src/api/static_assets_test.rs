//! Router-level tests for frontend asset serving.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::files::Workspace;
use crate::store::MemoryTaskStore;

fn test_app() -> axum::Router {
    let state = AppState::new(
        MemoryTaskStore::new(),
        Workspace::new(std::env::temp_dir()),
        3000,
        std::time::Instant::now(),
    );
    routes::create_router(state)
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn root_serves_the_ui() {
    let response = get(test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/html");
}

#[tokio::test]
async fn stylesheet_is_served_with_its_mime_type() {
    let response = get(test_app(), "/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/css");
    let cache = response.headers().get(header::CACHE_CONTROL).unwrap();
    assert_eq!(cache, "public, max-age=31536000");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_ui() {
    let response = get(test_app(), "/some-client-route").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "text/html");
    let cache = response.headers().get(header::CACHE_CONTROL).unwrap();
    assert_eq!(cache, "no-cache");
}

#[tokio::test]
async fn unknown_api_paths_do_not_reach_the_ui() {
    let response = get(test_app(), "/api/v1/nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn docs_are_mounted() {
    let response = get(test_app(), "/docs").await;

    assert_eq!(response.status(), StatusCode::OK);
}
