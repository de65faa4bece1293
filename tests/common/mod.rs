#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use invite_me_server::config::Config;
use invite_me_server::routes::create_routes;
use invite_me_server::state::AppState;
use invite_me_server::store::EventStore;

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: "http://localhost:5173".to_string(),
        seed_sample_event: false,
    }
}

/// Full router over a fresh store, returned alongside the store so tests
/// can inspect it directly.
pub fn build_test_app() -> (Router, Arc<EventStore>) {
    build_test_app_with(&test_config())
}

pub fn build_test_app_with(config: &Config) -> (Router, Arc<EventStore>) {
    let store = Arc::new(EventStore::new());
    let app = create_routes(AppState::new(Arc::clone(&store)), config);
    (app, store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    post_with_content_type(app, uri, "application/json", body).await
}

pub async fn post_with_content_type(
    app: &Router,
    uri: &str,
    content_type: &str,
    body: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
