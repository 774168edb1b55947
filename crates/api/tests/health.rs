//! Tests for the health endpoint and the shared middleware stack.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{body_json, get};
use sqlx::SqlitePool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_check_returns_ok(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_route_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_responses_carry_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be set");
    // MakeRequestUuid produces a UUID string.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cors_preflight_allows_configured_origin(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/overlays")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("allow-origin header should be set");
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = response
        .headers()
        .get("access-control-allow-methods")
        .expect("allow-methods header should be set");
    assert!(allow_methods.to_str().unwrap().contains("GET"));
}
