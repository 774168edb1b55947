use std::sync::Arc;

use crate::config::ServerConfig;

/// State injected into every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: studio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
