//! # API Errors
//!
//! Error types for the CRUD gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for gateway handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path identifier does not parse as an object id
    #[error("Invalid ID")]
    InvalidId,

    /// Request body does not parse as the expected shape
    #[error("Invalid input")]
    InvalidInput,

    /// Description is empty or missing on create
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// No document matches the identifier
    #[error("Bucket list not found")]
    NotFound,

    /// A targeted write failed; reported with the not-found status so the
    /// wire contract matches the original service
    #[error("{0}")]
    WriteFailed(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure during a read or insert
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::EmptyDescription => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::WriteFailed(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidInput.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::WriteFailed("connection reset".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse::from(ApiError::EmptyDescription);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Description cannot be empty");
    }
}
