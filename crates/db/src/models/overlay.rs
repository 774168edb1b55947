//! Row mapping for the `overlays` table.

use sqlx::types::Json;
use sqlx::FromRow;

use studio_core::overlay::{Overlay, OverlayStyle, Position, Size};
use studio_core::types::{OverlayId, Timestamp};

/// A row from the `overlays` table.
///
/// `position`, `size`, and `style` live in TEXT columns holding JSON, so
/// they decode through [`Json`]. Convert into [`Overlay`] before handing
/// rows to callers outside this crate.
#[derive(Debug, Clone, FromRow)]
pub struct OverlayRow {
    pub id: OverlayId,
    pub kind: String,
    pub content: String,
    pub position: Json<Position>,
    pub size: Json<Size>,
    pub style: Option<Json<OverlayStyle>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<OverlayRow> for Overlay {
    fn from(row: OverlayRow) -> Self {
        Overlay {
            id: row.id,
            kind: row.kind,
            content: row.content,
            position: row.position.0,
            size: row.size.0,
            style: row.style.map(|style| style.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
