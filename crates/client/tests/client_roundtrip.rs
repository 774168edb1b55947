//! End-to-end tests running the typed client against a live API server.
//!
//! Each test serves the real router (full middleware stack) on an
//! ephemeral local port, so requests travel over actual HTTP instead of
//! an in-process service call.

use std::sync::Arc;

use assert_matches::assert_matches;
use sqlx::SqlitePool;
use studio_api::{config::ServerConfig, router::build_app_router, state::AppState};
use studio_client::client::{ClientError, OverlayClient};
use studio_core::overlay::{CreateOverlay, OverlayStyle, Position, Size, UpdateOverlay};

/// Serves the API router on an ephemeral port and returns a client
/// pointed at it.
async fn spawn_test_server(pool: studio_db::DbPool) -> OverlayClient {
    let config = Arc::new(ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    });
    let app = build_app_router(
        AppState {
            pool,
            config: config.clone(),
        },
        &config,
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    OverlayClient::new(format!("http://{addr}/api"))
}

fn text_overlay(content: &str) -> CreateOverlay {
    CreateOverlay {
        kind: "text".to_string(),
        content: content.to_string(),
        position: Position { x: 25.0, y: 75.0 },
        size: Size {
            width: 320.0,
            height: 80.0,
        },
        style: None,
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_crud_roundtrip(pool: SqlitePool) {
    let client = spawn_test_server(pool).await;

    let mut input = text_overlay("Lower third");
    input.style = Some(OverlayStyle {
        font_size: Some(24.0),
        color: Some("#ffffff".to_string()),
        background_color: None,
        opacity: Some(0.9),
    });

    let created = client.create(&input).await.expect("create overlay");
    assert_eq!(created.kind, "text");
    assert_eq!(created.content, "Lower third");
    assert_eq!(created.style.as_ref().and_then(|s| s.opacity), Some(0.9));

    let fetched = client.get_by_id(created.id).await.expect("fetch overlay");
    assert_eq!(fetched, created);

    let updated = client
        .update(
            created.id,
            &UpdateOverlay {
                content: Some("Updated".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update overlay");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "Updated");
    assert_eq!(updated.position, created.position);
    assert_eq!(updated.style, created.style);

    let all = client.get_all().await.expect("list overlays");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], updated);

    client.delete(created.id).await.expect("delete overlay");
    let all = client.get_all().await.expect("list after delete");
    assert!(all.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_list_preserves_creation_order(pool: SqlitePool) {
    let client = spawn_test_server(pool).await;

    let first = client.create(&text_overlay("first")).await.expect("create");
    let second = client
        .create(&text_overlay("second"))
        .await
        .expect("create");

    let all = client.get_all().await.expect("list overlays");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_get_by_id_missing_returns_status_error(pool: SqlitePool) {
    let client = spawn_test_server(pool).await;

    let err = client
        .get_by_id(uuid::Uuid::new_v4())
        .await
        .expect_err("missing id should fail");

    assert_matches!(&err, ClientError::Status { status: 404, .. });
    assert_eq!(err.operation(), "get_by_id");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_create_rejects_invalid_opacity(pool: SqlitePool) {
    let client = spawn_test_server(pool).await;

    let mut input = text_overlay("Bad style");
    input.style = Some(OverlayStyle {
        opacity: Some(1.5),
        ..Default::default()
    });

    let err = client
        .create(&input)
        .await
        .expect_err("invalid opacity should fail");

    assert_matches!(
        &err,
        ClientError::Status { status: 400, body, .. } if body.contains("opacity")
    );
    assert_eq!(err.operation(), "create");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_delete_missing_returns_status_error(pool: SqlitePool) {
    let client = spawn_test_server(pool).await;

    let err = client
        .delete(uuid::Uuid::new_v4())
        .await
        .expect_err("missing id should fail");

    assert_matches!(&err, ClientError::Status { status: 404, .. });
    assert_eq!(err.operation(), "delete");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_concurrent_creates_get_unique_ids(pool: SqlitePool) {
    let client = spawn_test_server(pool).await;

    let overlay_a = text_overlay("A");
    let overlay_b = text_overlay("B");
    let (a, b) = tokio::join!(client.create(&overlay_a), client.create(&overlay_b));
    let a = a.expect("create A");
    let b = b.expect("create B");

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_client_unreachable_server_returns_transport_error() {
    // Port 9 (discard) has no listener in the test environment.
    let client = OverlayClient::new("http://127.0.0.1:9/api".to_string());

    let err = client
        .get_all()
        .await
        .expect_err("unreachable server should fail");

    assert_matches!(&err, ClientError::Transport { .. });
    assert_eq!(err.operation(), "get_all");
}
