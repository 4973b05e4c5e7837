//! Client error types

use thiserror::Error;

/// Client error type
///
/// Both failure kinds the storefront distinguishes - an explicit
/// non-success result from the server and a transport-level exception -
/// normalize to a human-readable message via `Display`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport failure)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server responded with an explicit non-success result
    #[error("{0}")]
    Api(String),

    /// Authentication required or session expired
    #[error("Authentication required")]
    Unauthorized,

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
