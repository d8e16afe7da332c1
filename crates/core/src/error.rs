//! Unified error types for mcp-gnews.
//!
//! Every tool failure surfaces to the MCP caller through one of these
//! variants; the `From<Error> for McpError` impl assigns stable codes.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use tokio_rusqlite::rusqlite;

/// Unified error types for the mcp-gnews server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (empty query, out-of-range max, ...).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The GNews API key is not configured.
    #[error("MISSING_CREDENTIAL: {0}")]
    MissingCredential(String),

    /// Non-200 response or network failure from the GNews API.
    #[error("UPSTREAM_ERROR: {0}")]
    Upstream(String),

    /// The upstream request exceeded the fixed timeout.
    #[error("UPSTREAM_TIMEOUT: {0}")]
    Timeout(String),

    /// Database operation failed.
    #[error("CACHE_ERROR: {0}")]
    Database(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("CACHE_ERROR: migration failed: {0}")]
    MigrationFailed(String),
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Database(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::MissingCredential(msg) => (-32001, msg.clone()),
            Error::Upstream(msg) => (-32002, msg.clone()),
            Error::Timeout(msg) => (-32003, msg.clone()),
            Error::Database(e) => (-32004, e.to_string()),
            Error::MigrationFailed(msg) => (-32004, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Upstream("GNews API error 500: boom".to_string());
        assert!(err.to_string().contains("UPSTREAM_ERROR"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_error_to_mcp_error() {
        let err = Error::InvalidInput("query is empty".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32602);

        let err = Error::MissingCredential("GNews API key is not configured".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32001);
    }
}
