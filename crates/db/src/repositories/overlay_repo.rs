//! Repository for the `overlays` table.

use chrono::Utc;
use uuid::Uuid;

use studio_core::overlay::{CreateOverlay, Overlay, UpdateOverlay};
use studio_core::types::OverlayId;

use crate::models::overlay::OverlayRow;
use crate::DbPool;

const COLUMNS: &str = "id, kind, content, position, size, style, created_at, updated_at";

/// Provides CRUD operations for overlay records.
pub struct OverlayRepo;

impl OverlayRepo {
    /// Insert a new overlay, assigning its id and timestamps, and return
    /// the stored row.
    pub async fn create(pool: &DbPool, input: &CreateOverlay) -> Result<Overlay, sqlx::Error> {
        let id: OverlayId = Uuid::new_v4();
        let now = Utc::now();

        let query = format!(
            "INSERT INTO overlays (id, kind, content, position, size, style, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OverlayRow>(&query)
            .bind(id)
            .bind(&input.kind)
            .bind(&input.content)
            .bind(sqlx::types::Json(&input.position))
            .bind(sqlx::types::Json(&input.size))
            .bind(input.style.as_ref().map(sqlx::types::Json))
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find an overlay by ID.
    pub async fn find_by_id(pool: &DbPool, id: OverlayId) -> Result<Option<Overlay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM overlays WHERE id = ?1");
        let row = sqlx::query_as::<_, OverlayRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Overlay::from))
    }

    /// List every overlay in creation order (id as tiebreak), so repeated
    /// reads without intervening writes return the same order.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Overlay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM overlays ORDER BY created_at ASC, id ASC");
        let rows = sqlx::query_as::<_, OverlayRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Overlay::from).collect())
    }

    /// Update an overlay. Only non-`None` fields are applied; a supplied
    /// style replaces the stored style wholesale. Refreshes `updated_at`
    /// and returns the merged row, or `None` if the id is unknown.
    pub async fn update(
        pool: &DbPool,
        id: OverlayId,
        input: &UpdateOverlay,
    ) -> Result<Option<Overlay>, sqlx::Error> {
        let query = format!(
            "UPDATE overlays SET \
                kind = COALESCE(?2, kind), \
                content = COALESCE(?3, content), \
                position = COALESCE(?4, position), \
                size = COALESCE(?5, size), \
                style = COALESCE(?6, style), \
                updated_at = ?7 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, OverlayRow>(&query)
            .bind(id)
            .bind(input.kind.as_deref())
            .bind(input.content.as_deref())
            .bind(input.position.as_ref().map(sqlx::types::Json))
            .bind(input.size.as_ref().map(sqlx::types::Json))
            .bind(input.style.as_ref().map(sqlx::types::Json))
            .bind(Utc::now())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Overlay::from))
    }

    /// Delete an overlay by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: OverlayId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM overlays WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
