//! Query executor
//!
//! Execution flow (strict order):
//! 1. Fetch candidate records for the container, in store order
//! 2. Filter candidates against all predicates (AND)
//! 3. Sort
//! 4. Limit
//!
//! With `LimitMode::NaturalOrder` steps 2 and 4 are fused: the scan stops
//! once `limit` matches are collected, and the sort runs over those.

use tracing::debug;

use crate::model::FilmEntry;
use crate::planner::FilmQuery;
use crate::store::RecordSource;

use super::errors::ExecutorResult;
use super::filters::PredicateFilter;
use super::limiter::{LimitMode, ResultLimiter};
use super::result::ExecutionResult;
use super::sorter::ResultSorter;

/// Query executor that runs queries against a record source
pub struct QueryExecutor<'a, S: RecordSource + ?Sized> {
    source: &'a S,
    limit_mode: LimitMode,
}

impl<'a, S: RecordSource + ?Sized> QueryExecutor<'a, S> {
    /// Creates an executor with the default limit mode
    pub fn new(source: &'a S) -> Self {
        Self::with_limit_mode(source, LimitMode::default())
    }

    pub fn with_limit_mode(source: &'a S, limit_mode: LimitMode) -> Self {
        Self { source, limit_mode }
    }

    /// Executes a query against one container.
    ///
    /// Same query + same candidates = same result.
    pub fn execute(&self, container: &str, query: &FilmQuery) -> ExecutorResult<ExecutionResult> {
        let candidates = self.source.candidates(container)?;
        let total = candidates.len();
        let limiter = ResultLimiter::new(query.limit());

        let (records, scanned_count, limit_applied) = match self.limit_mode {
            LimitMode::NaturalOrder => {
                let (mut records, scanned) = Self::filter_bounded(candidates, query, &limiter);
                ResultSorter::sort(&mut records, query.sort());
                (records, scanned, scanned < total)
            }
            LimitMode::SortedOrder => {
                let mut records: Vec<FilmEntry> = candidates
                    .into_iter()
                    .filter(|record| PredicateFilter::matches(record, query.predicates()))
                    .collect();
                ResultSorter::sort(&mut records, query.sort());
                let truncated = limiter.truncate(&mut records);
                (records, total, truncated)
            }
        };

        debug!(
            container,
            scanned = scanned_count,
            returned = records.len(),
            sort = %query.sort().key,
            limit_mode = self.limit_mode.as_str(),
            limit_applied,
            "query executed"
        );

        Ok(ExecutionResult {
            returned_count: records.len(),
            scanned_count,
            limit_applied,
            sort: query.sort(),
            records,
        })
    }

    /// Filters in store order, stopping once the limiter is full.
    ///
    /// Returns the matches and the number of candidates evaluated.
    fn filter_bounded(
        candidates: Vec<FilmEntry>,
        query: &FilmQuery,
        limiter: &ResultLimiter,
    ) -> (Vec<FilmEntry>, usize) {
        let mut matches = Vec::new();
        let mut scanned = 0;

        for record in candidates {
            if limiter.is_full(matches.len()) {
                break;
            }
            scanned += 1;
            if PredicateFilter::matches(&record, query.predicates()) {
                matches.push(record);
            }
        }

        (matches, scanned)
    }
}
