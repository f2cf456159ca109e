//! Client error types

use thiserror::Error;

/// Errors talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL or endpoint could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success response
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// 404 from the backend
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
