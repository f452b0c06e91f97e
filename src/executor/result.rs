//! Result types for query execution

use crate::model::FilmEntry;
use crate::planner::SortSpec;

/// Result of query execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Records in result order
    pub records: Vec<FilmEntry>,
    /// Number of candidates evaluated against the predicates
    pub scanned_count: usize,
    /// Number of records returned
    pub returned_count: usize,
    /// Whether the limit cut the scan or the result short
    pub limit_applied: bool,
    /// Sort that was applied
    pub sort: SortSpec,
}

impl ExecutionResult {
    /// Returns true if no records matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of results
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &FilmEntry> {
        self.records.iter()
    }

    /// Consumes the result, returning the records
    pub fn into_records(self) -> Vec<FilmEntry> {
        self.records
    }
}
