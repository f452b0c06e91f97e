//! # Predicate Builder
//!
//! Translates request parameters into a typed `FilmQuery`.
//!
//! Recognized parameters:
//!
//! | parameter | type | effect |
//! |---|---|---|
//! | `title` | string | exact title match |
//! | `year` | integer | exact year match |
//! | `minYear` / `maxYear` | integer | inclusive year bounds |
//! | `minAwards` / `maxAwards` | integer | inclusive award bounds |
//! | `nominations` | integer | exact nomination count |
//! | `isBestPicture` | boolean | exact match |
//! | `sortBy` | title, year, awards, nominations | sort strategy |
//! | `limit` | non-negative integer | result bound |
//!
//! Anything else is ignored. A recognized parameter with a value of the
//! wrong type fails the whole query.

use tracing::trace;

use super::ast::{FilmQuery, Predicate, SortKey, SortSpec};
use super::errors::{QueryError, QueryResult};

/// Builds queries from request parameters
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Builds a query from ordered name/value pairs.
    ///
    /// Each recognized filter parameter yields one predicate, so a
    /// repeated filter is AND-combined with itself. For `sortBy` and
    /// `limit` the last occurrence wins.
    pub fn build<I, K, V>(params: I) -> QueryResult<FilmQuery>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut predicates = Vec::new();
        let mut sort = SortSpec::default_title();
        let mut limit = None;

        for (name, value) in params {
            let (name, value) = (name.as_ref(), value.as_ref());
            match name {
                "sortBy" => {
                    sort = parse_sort(value)?;
                }
                "limit" => {
                    limit = parse_limit(value)?;
                }
                _ => match parse_predicate(name, value)? {
                    Some(predicate) => predicates.push(predicate),
                    None => trace!(parameter = name, "ignoring unrecognized parameter"),
                },
            }
        }

        Ok(FilmQuery::new(predicates, sort, limit))
    }
}

/// Parses one filter parameter, `None` if the name is not a filter
fn parse_predicate(name: &str, value: &str) -> QueryResult<Option<Predicate>> {
    let predicate = match name {
        "title" => Predicate::Title(value.to_string()),
        "year" => Predicate::Year(parse_int(name, value)?),
        "minYear" => Predicate::MinYear(parse_int(name, value)?),
        "maxYear" => Predicate::MaxYear(parse_int(name, value)?),
        "minAwards" => Predicate::MinAwards(parse_int(name, value)?),
        "maxAwards" => Predicate::MaxAwards(parse_int(name, value)?),
        "nominations" => Predicate::Nominations(parse_int(name, value)?),
        "isBestPicture" => Predicate::BestPicture(parse_bool(name, value)?),
        _ => return Ok(None),
    };
    Ok(Some(predicate))
}

/// Parse a signed 32-bit decimal integer
fn parse_int(name: &str, value: &str) -> QueryResult<i32> {
    value
        .parse()
        .map_err(|_| QueryError::malformed_parameter(name, value, "an integer"))
}

/// Parse a boolean literal, case-insensitively
fn parse_bool(name: &str, value: &str) -> QueryResult<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(QueryError::malformed_parameter(name, value, "true or false"))
    }
}

/// Parse `sortBy`; a blank value counts as not supplied
fn parse_sort(value: &str) -> QueryResult<SortSpec> {
    if value.trim().is_empty() {
        return Ok(SortSpec::default_title());
    }
    SortKey::parse(value).map(SortSpec::explicit)
}

/// Parse `limit`; a blank value means unbounded. Digits are not trimmed,
/// matching the integer filters.
fn parse_limit(value: &str) -> QueryResult<Option<usize>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<usize>()
        .map(Some)
        .map_err(|_| QueryError::malformed_parameter("limit", value, "a non-negative integer"))
}
