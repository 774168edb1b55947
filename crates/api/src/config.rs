/// Server configuration, sourced from the environment.
///
/// Every field falls back to a local-development default, so the server
/// starts with no configuration at all; deployments override via env vars.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (defaults to `0.0.0.0`).
    pub host: String,
    /// Bind port (defaults to `5000`).
    pub port: u16,
    /// Allowed CORS origins, from the comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (defaults to `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Read configuration from the environment, applying defaults.
    ///
    /// | Env var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `5000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}
