//! Row-mapping structs.
//!
//! Each submodule contains a `FromRow` struct matching the database row
//! plus the conversion into the corresponding `studio_core` entity.
//! Nested JSON columns are decoded through [`sqlx::types::Json`].

pub mod overlay;
