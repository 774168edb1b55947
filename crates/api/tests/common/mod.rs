//! Shared helpers for API integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use studio_api::config::ServerConfig;
use studio_api::router::build_app_router;
use studio_api::state::AppState;

/// A `ServerConfig` suitable for tests.
///
/// CORS origin is the dev default (`http://localhost:5173`); the request
/// timeout is 30 seconds.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the application router over the given pool.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so every test
/// request passes the production middleware stack (CORS, request ID,
/// tracing, timeout, panic recovery).
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    request(app, Method::POST, uri, Some(body)).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    request(app, Method::PUT, uri, Some(body)).await
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response {
    request(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}
