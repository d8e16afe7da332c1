//! GNews API client error types.

use std::sync::Arc;

/// Errors from the GNews API client.
#[derive(Debug, thiserror::Error)]
pub enum GNewsError {
    /// Missing GNews API key.
    #[error("missing API key: GNEWS_API_KEY not set")]
    MissingApiKey,

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid max parameter (must be 1-100).
    #[error("parameter 'max' must be between 1 and 100 inclusive, got {0}")]
    InvalidMax(u32),

    /// Non-200 response from the GNews API.
    ///
    /// The body is an excerpt truncated to 300 characters.
    #[error("GNews API error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for GNewsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { GNewsError::Timeout } else { GNewsError::Network(Arc::new(err)) }
    }
}
