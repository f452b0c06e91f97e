//! # REST API Errors
//!
//! Maps query and executor failures onto HTTP responses. A failed
//! request never carries a partial result.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::executor::{ExecutorError, ExecutorErrorCode};
use crate::planner::QueryError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Malformed parameter or unsupported sort key
    #[error("{}", .0.message())]
    Query(#[from] QueryError),

    /// Container missing or store unavailable
    #[error("{}", .0.message())]
    Execution(#[from] ExecutorError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::Query(_) => StatusCode::BAD_REQUEST,

            RestError::Execution(err) => match err.code() {
                // 404 Not Found
                ExecutorErrorCode::ContainerNotFound => StatusCode::NOT_FOUND,
                // 503 Service Unavailable
                ExecutorErrorCode::AdapterUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }

    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            RestError::Query(err) => err.code().code(),
            RestError::Execution(err) => err.code().code(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
