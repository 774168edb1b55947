//! Request handlers.
//!
//! Handler functions delegate to the repositories in `studio_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod overlays;
