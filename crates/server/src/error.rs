//! HTTP error contract for the holidays API.
//!
//! Every failure leaves the server as `{"code": ..., "message": ...}` with a
//! status derived from the code. Upstream and filesystem detail is logged,
//! never returned, except by the diagnostic listing.

use almanac_core::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const HOLIDAYS_NOT_FOUND: &str = "Holidays not found. Check country code/year.";
pub const FESTIVALS_NOT_FOUND: &str = "Festivals not found for this country.";
pub const FESTIVALS_UNREADABLE: &str = "Festival data could not be read.";

/// Error categories exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Query parameters missing or malformed.
    ValidationFailed,
    /// No data for the requested key.
    NotFound,
    /// Server-side fault.
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => ApiError::validation_failed(msg),
            Error::DatasetNotFound(_) => ApiError::not_found(FESTIVALS_NOT_FOUND),
            Error::UpstreamFailed(_) => ApiError::not_found(HOLIDAYS_NOT_FOUND),
            Error::DatasetReadFailed(_) => ApiError::internal_error(FESTIVALS_UNREADABLE),
            Error::Io(e) => ApiError::internal_error(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self)).into_response()
    }
}
