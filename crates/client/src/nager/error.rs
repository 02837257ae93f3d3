//! Upstream holiday provider error types.

use std::sync::Arc;

/// Errors from the public-holiday provider.
///
/// Variants exist for logging only. Callers collapse every variant into a
/// single "fetch failed" outcome and never forward the detail to clients.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Request timed out.
    #[error("request timeout")]
    Timeout,

    /// Network error (connect, TLS, body read).
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Provider answered with a non-success status.
    #[error("HTTP error: {status}")]
    Status { status: u16 },

    /// Response body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request URL could not be built from the base and parameters.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FetchError::Timeout } else { FetchError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status { status: 404 };
        assert!(err.to_string().contains("404"));

        let err = FetchError::Parse("expected value".to_string());
        assert!(err.to_string().contains("parse error"));
    }
}
