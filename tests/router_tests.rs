// tests/router_tests.rs

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;
use trivia_api::{routes, state::AppState, store::MemoryStore};

/// Builds the router in-process, without binding a socket.
fn app() -> Router {
    routes::create_router(AppState::new(Arc::new(MemoryStore::seeded())))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn malformed_create_body_is_422_json() {
    let (status, body) = send(post_json("/api/v1/questions", "{not json")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);
}

#[tokio::test]
async fn malformed_search_body_is_404_json() {
    let (status, body) = send(post_json("/api/v1/questions/search", "[1, 2")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn missing_content_type_on_quiz_is_422() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/quizzes")
        .body(Body::from(r#"{"quiz_category":{"id":0},"previous_questions":[]}"#))
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Unprocessable");
}

#[tokio::test]
async fn empty_store_questions_listing_is_404() {
    let request = Request::builder()
        .uri("/api/v1/questions")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");
}

#[tokio::test]
async fn quiz_on_empty_store_returns_null_question() {
    let (status, body) = send(post_json(
        "/api/v1/quizzes",
        r#"{"quiz_category":{"id":1,"type":"Science"},"previous_questions":[]}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/api/v1/categories")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
