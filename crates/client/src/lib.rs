//! Typed HTTP client for the overlay store API.
//!
//! Wraps the REST endpoints exposed by `studio-api` behind the shared
//! `studio-core` types, so consumers work with [`studio_core::overlay::Overlay`]
//! values instead of raw JSON.

pub mod client;
