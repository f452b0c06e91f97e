//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by record sources
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No container with the given name
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// Content could not be read
    #[error("Content unavailable: {0}")]
    Unavailable(String),

    /// Content was read but is not a valid content tree
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

impl StoreError {
    /// Returns true if the store itself failed, as opposed to the
    /// request naming a container that does not exist
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, StoreError::ContainerNotFound(_))
    }
}
