//! Result sorting for query execution
//!
//! Four ascending orderings, dispatched through one comparison table.
//! All of them are stable: ties keep their input order.

use std::cmp::Ordering;

use crate::model::FilmEntry;
use crate::planner::{SortKey, SortSpec};

/// Compares two records under one sort key
pub type Comparator = fn(&FilmEntry, &FilmEntry) -> Ordering;

/// Indexed by `SortKey as usize`
const COMPARATORS: [Comparator; 4] = [by_title, by_year, by_awards, by_nominations];

/// Sorts result records
pub struct ResultSorter;

impl ResultSorter {
    /// Returns the comparator for a sort key
    pub fn comparator(key: SortKey) -> Comparator {
        COMPARATORS[key as usize]
    }

    /// Sorts records according to the sort specification.
    ///
    /// An implicit sort over zero or one record is skipped; an explicit
    /// one always runs.
    pub fn sort(records: &mut [FilmEntry], spec: SortSpec) {
        if !spec.explicit && records.len() <= 1 {
            return;
        }
        records.sort_by(Self::comparator(spec.key));
    }
}

/// Code-point order
fn by_title(a: &FilmEntry, b: &FilmEntry) -> Ordering {
    a.title.cmp(&b.title)
}

// Unset values order before any set value.
fn by_year(a: &FilmEntry, b: &FilmEntry) -> Ordering {
    a.year.cmp(&b.year)
}

fn by_awards(a: &FilmEntry, b: &FilmEntry) -> Ordering {
    a.awards.cmp(&b.awards)
}

fn by_nominations(a: &FilmEntry, b: &FilmEntry) -> Ordering {
    a.nominations.cmp(&b.nominations)
}
