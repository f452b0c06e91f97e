//! Typed query structures
//!
//! A `FilmQuery` is built once per request and is immutable thereafter.

use std::fmt;

use super::errors::{QueryError, QueryResult};

/// A boolean test over one record field, derived from one request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// title = value (exact, case-sensitive)
    Title(String),
    /// year = value
    Year(i32),
    /// year >= value
    MinYear(i32),
    /// year <= value
    MaxYear(i32),
    /// awards >= value
    MinAwards(i32),
    /// awards <= value
    MaxAwards(i32),
    /// nominations = value
    Nominations(i32),
    /// isBestPicture = value
    BestPicture(bool),
}

impl Predicate {
    /// Returns the request parameter this predicate was built from
    pub fn parameter(&self) -> &'static str {
        match self {
            Predicate::Title(_) => "title",
            Predicate::Year(_) => "year",
            Predicate::MinYear(_) => "minYear",
            Predicate::MaxYear(_) => "maxYear",
            Predicate::MinAwards(_) => "minAwards",
            Predicate::MaxAwards(_) => "maxAwards",
            Predicate::Nominations(_) => "nominations",
            Predicate::BestPicture(_) => "isBestPicture",
        }
    }
}

/// Sort strategy, selected once per query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Lexicographic by title (default)
    #[default]
    Title = 0,
    /// Ascending by year
    Year = 1,
    /// Ascending by awards
    Awards = 2,
    /// Ascending by nominations
    Nominations = 3,
}

impl SortKey {
    /// Every sort key, in comparison table order
    pub const ALL: [SortKey; 4] = [
        SortKey::Title,
        SortKey::Year,
        SortKey::Awards,
        SortKey::Nominations,
    ];

    /// Parses a `sortBy` value, case-insensitively.
    ///
    /// Unrecognized values are an error, never a fallback to the default.
    pub fn parse(value: &str) -> QueryResult<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| QueryError::unsupported_sort_key(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Year => "year",
            SortKey::Awards => "awards",
            SortKey::Nominations => "nominations",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort specification: the key plus whether the client asked for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    /// True when `sortBy` was supplied. An explicit sort always runs,
    /// even over zero or one record.
    pub explicit: bool,
}

impl SortSpec {
    /// The implicit title ordering used when no `sortBy` is given
    pub fn default_title() -> Self {
        Self::default()
    }

    /// An explicitly requested ordering
    pub fn explicit(key: SortKey) -> Self {
        Self {
            key,
            explicit: true,
        }
    }
}

/// A fully built film query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilmQuery {
    predicates: Vec<Predicate>,
    sort: SortSpec,
    limit: Option<usize>,
}

impl FilmQuery {
    pub fn new(predicates: Vec<Predicate>, sort: SortSpec, limit: Option<usize>) -> Self {
        Self {
            predicates,
            sort,
            limit,
        }
    }

    /// Predicates, AND-combined
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Maximum number of results; `None` is unbounded
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::QueryErrorCode;

    #[test]
    fn test_sort_key_case_insensitive() {
        assert_eq!(SortKey::parse("YEAR").unwrap(), SortKey::Year);
        assert_eq!(SortKey::parse("Awards").unwrap(), SortKey::Awards);
        assert_eq!(SortKey::parse("nominations").unwrap(), SortKey::Nominations);
        assert_eq!(SortKey::parse("title").unwrap(), SortKey::Title);
    }

    #[test]
    fn test_sort_key_unsupported() {
        let err = SortKey::parse("numberOfReferences").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::UnsupportedSortKey);
        assert_eq!(err.value(), "numberOfReferences");
    }

    #[test]
    fn test_default_sort_is_implicit_title() {
        let spec = SortSpec::default_title();
        assert_eq!(spec.key, SortKey::Title);
        assert!(!spec.explicit);
        assert!(SortSpec::explicit(SortKey::Title).explicit);
    }

    #[test]
    fn test_predicate_parameter_names() {
        assert_eq!(Predicate::MinAwards(3).parameter(), "minAwards");
        assert_eq!(Predicate::BestPicture(true).parameter(), "isBestPicture");
    }
}
