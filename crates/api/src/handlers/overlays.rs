//! Handlers for overlay CRUD endpoints.
//!
//! Request bodies are extracted as `Result<Json<_>, JsonRejection>` so a
//! malformed or incomplete body (e.g. a missing required field) surfaces
//! as a 400 `VALIDATION_ERROR` with the same JSON shape as every other
//! error, instead of Axum's plain-text rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use studio_core::error::CoreError;
use studio_core::overlay::{self, CreateOverlay, Overlay, UpdateOverlay};
use studio_core::types::OverlayId;
use studio_db::repositories::OverlayRepo;
use studio_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that an overlay exists, returning the full record.
async fn ensure_overlay_exists(pool: &DbPool, id: OverlayId) -> AppResult<Overlay> {
    OverlayRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Overlay",
            id,
        })
    })
}

/// Validate every field of a create request.
fn validate_create_overlay(input: &CreateOverlay) -> AppResult<()> {
    overlay::validate_kind(&input.kind)?;
    overlay::validate_position(&input.position)?;
    overlay::validate_size(&input.size)?;
    if let Some(ref style) = input.style {
        overlay::validate_style(style)?;
    }
    Ok(())
}

/// Validate the supplied fields of a partial update.
fn validate_update_overlay(input: &UpdateOverlay) -> AppResult<()> {
    if let Some(ref kind) = input.kind {
        overlay::validate_kind(kind)?;
    }
    if let Some(ref position) = input.position {
        overlay::validate_position(position)?;
    }
    if let Some(ref size) = input.size {
        overlay::validate_size(size)?;
    }
    if let Some(ref style) = input.style {
        overlay::validate_style(style)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /overlays
// ---------------------------------------------------------------------------

/// List all overlays in creation order.
pub async fn list_overlays(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = OverlayRepo::list_all(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed overlays");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /overlays
// ---------------------------------------------------------------------------

/// Create a new overlay.
pub async fn create_overlay(
    State(state): State<AppState>,
    payload: Result<Json<CreateOverlay>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
    validate_create_overlay(&input)?;

    let created = OverlayRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %created.id, kind = %created.kind, "Overlay created");
    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /overlays/{id}
// ---------------------------------------------------------------------------

/// Get a single overlay by ID.
pub async fn get_overlay(
    State(state): State<AppState>,
    Path(id): Path<OverlayId>,
) -> AppResult<impl IntoResponse> {
    let overlay = ensure_overlay_exists(&state.pool, id).await?;
    Ok(Json(overlay))
}

// ---------------------------------------------------------------------------
// PUT /overlays/{id}
// ---------------------------------------------------------------------------

/// Partially update an existing overlay. Omitted fields keep their
/// stored values; `updated_at` is refreshed.
pub async fn update_overlay(
    State(state): State<AppState>,
    Path(id): Path<OverlayId>,
    payload: Result<Json<UpdateOverlay>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
    ensure_overlay_exists(&state.pool, id).await?;
    validate_update_overlay(&input)?;

    let updated = OverlayRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Overlay",
            id,
        }))?;
    tracing::info!(id = %updated.id, "Overlay updated");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /overlays/{id}
// ---------------------------------------------------------------------------

/// Delete an overlay by ID.
pub async fn delete_overlay(
    State(state): State<AppState>,
    Path(id): Path<OverlayId>,
) -> AppResult<StatusCode> {
    let deleted = OverlayRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(%id, "Overlay deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Overlay",
            id,
        }))
    }
}
