//! Predicate filtering for query execution
//!
//! Typed, exact semantics. A record missing the field a predicate
//! reads never matches that predicate.

use crate::model::FilmEntry;
use crate::planner::Predicate;

/// Evaluates predicates against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record matches all predicates.
    ///
    /// Stops at the first predicate that fails. An empty predicate set
    /// matches every record.
    pub fn matches(record: &FilmEntry, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(record, pred))
    }

    /// Checks if a record matches a single predicate
    pub fn matches_predicate(record: &FilmEntry, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::Title(title) => record.title == *title,
            Predicate::Year(year) => record.year == Some(*year),
            Predicate::MinYear(min) => record.year.is_some_and(|y| y >= *min),
            Predicate::MaxYear(max) => record.year.is_some_and(|y| y <= *max),
            Predicate::MinAwards(min) => record.awards.is_some_and(|a| a >= *min),
            Predicate::MaxAwards(max) => record.awards.is_some_and(|a| a <= *max),
            Predicate::Nominations(n) => record.nominations == Some(*n),
            Predicate::BestPicture(flag) => record.is_best_picture == Some(*flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parasite() -> FilmEntry {
        FilmEntry::new("Parasite")
            .with_year(2019)
            .with_awards(4)
            .with_nominations(6)
            .with_best_picture(true)
            .with_references(8855)
    }

    #[test]
    fn test_title_exact_match() {
        assert!(PredicateFilter::matches(
            &parasite(),
            &[Predicate::Title("Parasite".to_string())]
        ));
        assert!(!PredicateFilter::matches(
            &parasite(),
            &[Predicate::Title("parasite".to_string())]
        ));
    }

    #[test]
    fn test_inclusive_bounds() {
        let film = parasite();
        assert!(PredicateFilter::matches(&film, &[Predicate::MinYear(2019)]));
        assert!(PredicateFilter::matches(&film, &[Predicate::MaxYear(2019)]));
        assert!(!PredicateFilter::matches(&film, &[Predicate::MinYear(2020)]));
        assert!(PredicateFilter::matches(&film, &[Predicate::MinAwards(4)]));
        assert!(PredicateFilter::matches(&film, &[Predicate::MaxAwards(4)]));
        assert!(!PredicateFilter::matches(&film, &[Predicate::MaxAwards(3)]));
    }

    #[test]
    fn test_exact_numeric_and_boolean() {
        let film = parasite();
        assert!(PredicateFilter::matches(&film, &[Predicate::Year(2019)]));
        assert!(PredicateFilter::matches(&film, &[Predicate::Nominations(6)]));
        assert!(!PredicateFilter::matches(&film, &[Predicate::Nominations(5)]));
        assert!(PredicateFilter::matches(&film, &[Predicate::BestPicture(true)]));
        assert!(!PredicateFilter::matches(&film, &[Predicate::BestPicture(false)]));
    }

    #[test]
    fn test_multiple_predicates_and() {
        let film = parasite();
        assert!(PredicateFilter::matches(
            &film,
            &[Predicate::Year(2019), Predicate::MinAwards(4)]
        ));
        assert!(!PredicateFilter::matches(
            &film,
            &[Predicate::Year(2019), Predicate::MinAwards(5)]
        ));
    }

    #[test]
    fn test_empty_predicates_match_all() {
        assert!(PredicateFilter::matches(&FilmEntry::new("Wings"), &[]));
    }

    #[test]
    fn test_missing_field_no_match() {
        let film = FilmEntry::new("Wings");
        assert!(!PredicateFilter::matches(&film, &[Predicate::MinYear(0)]));
        assert!(!PredicateFilter::matches(&film, &[Predicate::MaxAwards(100)]));
        assert!(!PredicateFilter::matches(&film, &[Predicate::BestPicture(false)]));
    }
}
