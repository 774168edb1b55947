//! Overlay entity types, kind constants, and write validation.
//!
//! An overlay is a text or logo element composited on top of a video
//! surface. Position is expressed in percent of the surface, size in
//! pixels. These types are the wire contract shared by the API server
//! and the HTTP client binding, so field names serialize in camelCase
//! and the `kind` field appears as `type` in JSON.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{OverlayId, Timestamp};

// ---------------------------------------------------------------------------
// Kind constants
// ---------------------------------------------------------------------------

/// Text overlay: `content` holds the text to render.
pub const KIND_TEXT: &str = "text";

/// Logo overlay: `content` holds an image URL.
pub const KIND_LOGO: &str = "logo";

/// All valid overlay kinds.
pub const VALID_KINDS: &[&str] = &[KIND_TEXT, KIND_LOGO];

// ---------------------------------------------------------------------------
// Validation limits
// ---------------------------------------------------------------------------

/// Minimum position coordinate, in percent of the display surface.
pub const MIN_POSITION_PCT: f64 = 0.0;

/// Maximum position coordinate, in percent of the display surface.
pub const MAX_POSITION_PCT: f64 = 100.0;

/// Minimum style opacity (fully transparent).
pub const MIN_OPACITY: f64 = 0.0;

/// Maximum style opacity (fully opaque).
pub const MAX_OPACITY: f64 = 1.0;

// ---------------------------------------------------------------------------
// Entity and DTOs
// ---------------------------------------------------------------------------

/// Percentage coordinates of an overlay's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Pixel dimensions of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Optional presentation attributes. Every field may be absent; absent
/// fields are omitted from the JSON representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// A stored overlay record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    /// Server-assigned identifier, stable for the record's lifetime.
    pub id: OverlayId,
    /// One of [`VALID_KINDS`]. Serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Text body for text overlays, image URL for logo overlays.
    pub content: String,
    pub position: Position,
    pub size: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<OverlayStyle>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new overlay. The server assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOverlay {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub position: Position,
    pub size: Size,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<OverlayStyle>,
}

/// DTO for partially updating an overlay. All fields are optional;
/// omitted fields keep their stored values. A supplied `style` replaces
/// the stored style object wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOverlay {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<OverlayStyle>,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that `kind` is one of the allowed overlay kinds.
pub fn validate_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid overlay type '{kind}'. Must be one of: {}",
            VALID_KINDS.join(", ")
        )))
    }
}

/// Validate that both position coordinates are finite percentages
/// within [`MIN_POSITION_PCT`]..=[`MAX_POSITION_PCT`].
pub fn validate_position(position: &Position) -> Result<(), CoreError> {
    for (axis, value) in [("x", position.x), ("y", position.y)] {
        if value.is_nan() || value.is_infinite() {
            return Err(CoreError::Validation(format!(
                "position.{axis} must be a finite number"
            )));
        }
        if value < MIN_POSITION_PCT || value > MAX_POSITION_PCT {
            return Err(CoreError::Validation(format!(
                "position.{axis} must be between {MIN_POSITION_PCT} and {MAX_POSITION_PCT}, got {value}"
            )));
        }
    }
    Ok(())
}

/// Validate that both size dimensions are finite and strictly positive.
pub fn validate_size(size: &Size) -> Result<(), CoreError> {
    for (dimension, value) in [("width", size.width), ("height", size.height)] {
        if value.is_nan() || value.is_infinite() {
            return Err(CoreError::Validation(format!(
                "size.{dimension} must be a finite number"
            )));
        }
        if value <= 0.0 {
            return Err(CoreError::Validation(format!(
                "size.{dimension} must be greater than 0, got {value}"
            )));
        }
    }
    Ok(())
}

/// Validate a style object. Only `opacity` is range-constrained; the
/// color fields accept any CSS color string (including `transparent`).
pub fn validate_style(style: &OverlayStyle) -> Result<(), CoreError> {
    if let Some(opacity) = style.opacity {
        if opacity.is_nan() || opacity.is_infinite() {
            return Err(CoreError::Validation(
                "style.opacity must be a finite number".to_string(),
            ));
        }
        if opacity < MIN_OPACITY || opacity > MAX_OPACITY {
            return Err(CoreError::Validation(format!(
                "style.opacity must be between {MIN_OPACITY} and {MAX_OPACITY}, got {opacity}"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
