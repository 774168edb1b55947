//! Repository layer.
//!
//! Repositories are zero-sized structs whose async CRUD methods take
//! `&DbPool` as their first argument.

pub mod overlay_repo;

pub use overlay_repo::OverlayRepo;
