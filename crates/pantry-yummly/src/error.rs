//! Yummly client error types.

use thiserror::Error;

/// Fallback message when the upstream error body is empty.
pub const UPSTREAM_FAILURE: &str = "Failed to fetch data from Yummly2 API";

/// Errors that can occur when calling the Yummly API.
#[derive(Debug, Error)]
pub enum YummlyError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Yummly returned a status other than 200.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Yummly.
        status: u16,
        /// Response body, or [`UPSTREAM_FAILURE`] when it was empty.
        message: String,
    },

    /// A 200 response whose body is not JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured base URL or endpoint does not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Credentials cannot be sent as HTTP header values.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl YummlyError {
    /// HTTP status to report downstream. Transport and decode failures map to 500.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            _ => 500,
        }
    }
}
