//! REST client for the overlay store endpoints.
//!
//! Wraps the overlay CRUD API (create, list, fetch, update, delete)
//! using [`reqwest`]. Every error carries the name of the operation
//! that produced it so callers can report failures precisely.

use studio_core::overlay::{CreateOverlay, Overlay, UpdateOverlay};
use studio_core::types::OverlayId;

/// Base URL used when `STUDIO_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// HTTP client for a single overlay store instance.
pub struct OverlayClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the overlay REST client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP exchange failed before a valid response body could be
    /// read (connection, timeout, or body decode).
    #[error("Request failed during {operation}: {source}")]
    Transport {
        /// Name of the client operation that failed.
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status code.
    #[error("API error during {operation} ({status}): {body}")]
    Status {
        /// Name of the client operation that failed.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body text, kept for diagnostics.
        body: String,
    },
}

impl ClientError {
    fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { operation, source }
    }

    /// Name of the client operation that produced this error.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Transport { operation, .. } => operation,
            Self::Status { operation, .. } => operation,
        }
    }
}

impl OverlayClient {
    /// Create a new client for an overlay store instance.
    ///
    /// * `base_url` - API base URL without a trailing slash, e.g.
    ///   `http://localhost:5000/api`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Create a client from the `STUDIO_API_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`] when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STUDIO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// API base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new overlay.
    ///
    /// Sends a `POST /overlays` request and returns the stored record
    /// with its server-assigned id and timestamps.
    pub async fn create(&self, input: &CreateOverlay) -> Result<Overlay, ClientError> {
        let response = self
            .client
            .post(format!("{}/overlays", self.base_url))
            .json(input)
            .send()
            .await
            .map_err(|e| ClientError::transport("create", e))?;

        Self::parse_response("create", response).await
    }

    /// Fetch every stored overlay, oldest first.
    ///
    /// Sends a `GET /overlays` request.
    pub async fn get_all(&self) -> Result<Vec<Overlay>, ClientError> {
        let response = self
            .client
            .get(format!("{}/overlays", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::transport("get_all", e))?;

        Self::parse_response("get_all", response).await
    }

    /// Fetch a single overlay by id.
    ///
    /// Sends a `GET /overlays/{id}` request. A missing record surfaces
    /// as [`ClientError::Status`] with status 404.
    pub async fn get_by_id(&self, id: OverlayId) -> Result<Overlay, ClientError> {
        let response = self
            .client
            .get(format!("{}/overlays/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| ClientError::transport("get_by_id", e))?;

        Self::parse_response("get_by_id", response).await
    }

    /// Apply a partial update to an overlay.
    ///
    /// Sends a `PUT /overlays/{id}` request with only the fields set in
    /// `changes`. Returns the full record after the merge.
    pub async fn update(
        &self,
        id: OverlayId,
        changes: &UpdateOverlay,
    ) -> Result<Overlay, ClientError> {
        let response = self
            .client
            .put(format!("{}/overlays/{}", self.base_url, id))
            .json(changes)
            .send()
            .await
            .map_err(|e| ClientError::transport("update", e))?;

        Self::parse_response("update", response).await
    }

    /// Delete an overlay by id.
    ///
    /// Sends a `DELETE /overlays/{id}` request. The server responds
    /// with `204 No Content` on success.
    pub async fn delete(&self, id: OverlayId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/overlays/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| ClientError::transport("delete", e))?;

        Self::check_status("delete", response).await
    }

    // ---- private helpers ----

    /// Check for a success status code, returning the response untouched
    /// or a [`ClientError::Status`] holding the status and body text.
    async fn ensure_success(
        operation: &'static str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Status {
                operation,
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode the JSON body of a successful response.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        operation: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(operation, response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::transport(operation, e))
    }

    /// Check for a success status code, discarding the body.
    async fn check_status(
        operation: &'static str,
        response: reqwest::Response,
    ) -> Result<(), ClientError> {
        Self::ensure_success(operation, response).await?;
        Ok(())
    }
}
