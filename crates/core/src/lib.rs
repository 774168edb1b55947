//! Domain types and validation for the overlay store.
//!
//! Holds the overlay entity, its create/update DTOs, the validation rules
//! applied on every write, and the shared error taxonomy. This crate has no
//! I/O; the persistence and HTTP layers build on top of it.

pub mod error;
pub mod overlay;
pub mod types;
