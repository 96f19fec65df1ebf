//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"code": "...", "message": "..."}`
//! with a stable code clients can match on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cattery_core::RepoError;
use log::{error, warn};
use thiserror::Error;

/// Stable error code constants.
pub mod error_code {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const STORAGE_UNAVAILABLE: &str = "STORAGE_UNAVAILABLE";
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request referenced data that cannot be linked. HTTP 400.
    #[error("{0}")]
    BadRequest(String),

    /// The backing store failed or holds unreadable rows. HTTP 500.
    #[error("{0}")]
    StorageUnavailable(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => error_code::BAD_REQUEST,
            ApiError::StorageUnavailable(_) => error_code::STORAGE_UNAVAILABLE,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::UnknownOwner(_) => ApiError::BadRequest(value.to_string()),
            other => ApiError::StorageUnavailable(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                "event=http_error module=http status=error code={} error={}",
                self.error_code(),
                self
            );
        } else {
            warn!(
                "event=http_error module=http status=rejected code={} error={}",
                self.error_code(),
                self
            );
        }

        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
