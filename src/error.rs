//! Structured error types for store operations and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the task store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Caller-supplied data failed a precondition. Maps to HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Referenced identifier does not exist. Maps to HTTP 404.
    #[error("{0}")]
    NotFound(String),
}

impl StoreError {
    // Convenience constructors

    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }

    pub fn task_not_found() -> Self {
        StoreError::NotFound("Task not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Failure envelope: `{ "success": false, "message": "..." }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
