//! Executor error types
//!
//! Error codes:
//! - FILM_ADAPTER_UNAVAILABLE (ERROR)
//! - FILM_CONTAINER_NOT_FOUND (ERROR)
//!
//! Store failures are propagated, never recovered.

use std::fmt;

use crate::store::StoreError;

/// Executor-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// The record source could not supply candidates
    AdapterUnavailable,
    /// The requested container does not exist
    ContainerNotFound,
}

impl ExecutorErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::AdapterUnavailable => "FILM_ADAPTER_UNAVAILABLE",
            ExecutorErrorCode::ContainerNotFound => "FILM_CONTAINER_NOT_FOUND",
        }
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error type with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorError {
    code: ExecutorErrorCode,
    message: String,
}

impl ExecutorError {
    /// Create an adapter unavailable error
    pub fn adapter_unavailable(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::AdapterUnavailable,
            message: reason.into(),
        }
    }

    /// Create a container not found error
    pub fn container_not_found(container: &str) -> Self {
        Self {
            code: ExecutorErrorCode::ContainerNotFound,
            message: format!("no film container named '{}'", container),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ExecutorErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<StoreError> for ExecutorError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ContainerNotFound(name) => Self::container_not_found(&name),
            other => Self::adapter_unavailable(other.to_string()),
        }
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ExecutorError {}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;
