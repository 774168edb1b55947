//! Route definitions for overlay CRUD.
//!
//! ```text
//! GET    /          list_overlays
//! POST   /          create_overlay
//! GET    /{id}      get_overlay
//! PUT    /{id}      update_overlay
//! DELETE /{id}      delete_overlay
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::overlays;
use crate::state::AppState;

/// Overlay routes, mounted at `/overlays`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(overlays::list_overlays).post(overlays::create_overlay),
        )
        .route(
            "/{id}",
            get(overlays::get_overlay)
                .put(overlays::update_overlay)
                .delete(overlays::delete_overlay),
        )
}
