//! Query planning for film queries
//!
//! Turns raw request parameters into a typed, immutable `FilmQuery`:
//! a set of predicates, a sort strategy, and an optional limit.
//!
//! All parameter validation happens here, before any candidate record
//! is fetched.

mod ast;
mod builder;
mod errors;

pub use ast::{FilmQuery, Predicate, SortKey, SortSpec};
pub use builder::PredicateBuilder;
pub use errors::{QueryError, QueryErrorCode, QueryResult, Severity};
