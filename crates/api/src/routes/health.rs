//! Service health endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by `GET /api/health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when fully healthy, `"degraded"` when the database probe fails.
    pub status: &'static str,
    /// Version of this crate.
    pub version: &'static str,
    /// Result of the database probe.
    pub db_healthy: bool,
}

/// Report service liveness and database reachability.
///
/// A failed probe flips `status` to `"degraded"`; the endpoint itself
/// still answers 200.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = studio_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health route, mounted under `/api` with the rest of the tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
