pub mod health;
pub mod overlays;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                    service + database health
///
/// /overlays                  list, create
/// /overlays/{id}             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/overlays", overlays::router())
}
