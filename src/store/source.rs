//! The record source seam

use crate::model::FilmEntry;

use super::errors::StoreResult;

/// Supplies candidate records for a query.
///
/// Implementations must return records in the container's natural
/// order. Sources are shared read-only across concurrent requests.
pub trait RecordSource: Send + Sync {
    /// Returns the ordered candidate records of a container
    fn candidates(&self, container: &str) -> StoreResult<Vec<FilmEntry>>;
}

