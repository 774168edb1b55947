//! Application router assembly.
//!
//! [`build_app_router`] is the single place the route tree meets the
//! middleware stack; the binary and the integration tests both call it,
//! so they cannot drift apart.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Assemble the application [`Router`]: routes under `/api` plus the
/// middleware stack.
///
/// Layers run outermost-first in this order:
///
/// 1. CORS
/// 2. Request ID assignment
/// 3. Request/response tracing
/// 4. Request ID propagation to the response
/// 5. Request timeout
/// 6. Panic recovery
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Everything (overlays + health) lives under /api.
        .nest("/api", routes::api_routes())
        // -- Middleware (`.layer` calls apply bottom-up) --
        // Turn panics into 500 responses.
        .layer(CatchPanicLayer::new())
        // Per-request timeout, 408 on expiry.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Copy the request ID onto the response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Request/response spans.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Stamp each incoming request with a UUID.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}

/// Build the CORS layer from the configured origins.
///
/// An invalid entry in `CORS_ORIGINS` panics during startup instead of
/// serving with a broken CORS policy.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
