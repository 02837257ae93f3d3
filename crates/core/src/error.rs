//! Unified error types for the holidays service.
//!
//! Every failure a request can hit is folded into one of these variants
//! before it reaches the HTTP layer.

use crate::dataset::DatasetError;

/// Unified error types for the holidays service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed request parameters (country code length, year range).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// No festival dataset exists for the requested country.
    #[error("DATASET_NOT_FOUND: {0}")]
    DatasetNotFound(String),

    /// The upstream holiday provider could not produce a payload.
    #[error("UPSTREAM_FAILED: {0}")]
    UpstreamFailed(String),

    /// A local dataset file exists but could not be read or parsed.
    #[error("DATASET_READ_FAILED: {0}")]
    DatasetReadFailed(String),

    /// Raw filesystem error, only surfaced by diagnostics.
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DatasetError> for Error {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::NotFound { .. } => Error::DatasetNotFound(err.to_string()),
            DatasetError::ReadFailed { .. } => Error::DatasetReadFailed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("country must be exactly 2 characters".to_string());
        assert!(err.to_string().contains("INVALID_INPUT"));
        assert!(err.to_string().contains("country must be exactly 2 characters"));
    }

    #[test]
    fn test_dataset_not_found_maps_to_dataset_not_found() {
        let err: Error = DatasetError::NotFound { country: "XX".into() }.into();
        assert!(matches!(err, Error::DatasetNotFound(_)));
        assert!(err.to_string().contains("DATASET_NOT_FOUND"));
    }

    #[test]
    fn test_dataset_read_failure_maps_to_read_failed() {
        let err: Error =
            DatasetError::ReadFailed { path: PathBuf::from("festivals/XX.json"), reason: "bad json".into() }.into();
        assert!(matches!(err, Error::DatasetReadFailed(_)));
        assert!(err.to_string().contains("DATASET_READ_FAILED"));
    }
}
