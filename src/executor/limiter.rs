//! Result limiting
//!
//! Where the limit is applied relative to the sort changes the result
//! whenever a non-title sort key is combined with a limit.

use serde::{Deserialize, Serialize};

use crate::model::FilmEntry;

/// Where the limit bounds the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitMode {
    /// Collect at most `limit` matches in store order, then sort them.
    ///
    /// The output is the first `limit` matches re-sorted, not the top
    /// `limit` records by the requested key.
    #[default]
    NaturalOrder,
    /// Filter everything, sort, then keep the first `limit` records.
    SortedOrder,
}

impl LimitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitMode::NaturalOrder => "natural_order",
            LimitMode::SortedOrder => "sorted_order",
        }
    }
}

/// Bounds a sequence to a maximum number of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimiter {
    limit: Option<usize>,
}

impl ResultLimiter {
    /// `None` means unbounded
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    /// Returns true once `collected` records reach the limit
    pub fn is_full(&self, collected: usize) -> bool {
        self.limit.is_some_and(|limit| collected >= limit)
    }

    /// Keeps the first `limit` records in their current order.
    ///
    /// Returns true if any record was dropped.
    pub fn truncate(&self, records: &mut Vec<FilmEntry>) -> bool {
        match self.limit {
            Some(limit) if records.len() > limit => {
                records.truncate(limit);
                true
            }
            _ => false,
        }
    }
}
