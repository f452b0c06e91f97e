//! Query executor subsystem
//!
//! Consumes a `FilmQuery` and the candidate records of one container
//! and produces a deterministic, ordered, size-bounded result.
//!
//! # Invariants
//!
//! - Filtering preserves store order
//! - All sorts are stable
//! - Store failures abort the query; there are no partial results

mod errors;
mod executor;
mod filters;
mod limiter;
mod result;
mod sorter;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult};
pub use executor::QueryExecutor;
pub use filters::PredicateFilter;
pub use limiter::{LimitMode, ResultLimiter};
pub use result::ExecutionResult;
pub use sorter::{Comparator, ResultSorter};
