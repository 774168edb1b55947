/// Overlay identifiers are server-assigned UUIDs (v4).
pub type OverlayId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
