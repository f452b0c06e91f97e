//! Query Scenario Tests
//!
//! End-to-end queries over the oscars fixture:
//! - Documented request/response examples
//! - Limit and sort interaction in both limit modes
//! - Empty results and rejected parameters

use std::path::Path;
use std::sync::Arc;

use filmquery::executor::LimitMode;
use filmquery::planner::QueryErrorCode;
use filmquery::rest_api::{FilmApi, FilmListResponse, RestError};
use filmquery::store::{ContentStore, RecordSource};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn fixture_store() -> ContentStore {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/oscars.json");
    ContentStore::load(&path).unwrap()
}

fn api(limit_mode: LimitMode) -> FilmApi {
    FilmApi::new(Arc::new(fixture_store()), limit_mode)
}

fn run(params: &[(&str, &str)]) -> FilmListResponse {
    api(LimitMode::NaturalOrder).query("oscars", params).unwrap()
}

fn titles(response: &FilmListResponse) -> Vec<&str> {
    response.result.iter().map(|f| f.title.as_str()).collect()
}

// =============================================================================
// Documented Examples
// =============================================================================

/// year=2019&minAwards=4 returns exactly Parasite.
#[test]
fn test_single_match_by_year_and_awards() {
    let response = run(&[("year", "2019"), ("minAwards", "4")]);

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "result": [{
                "title": "Parasite",
                "year": 2019,
                "awards": 4,
                "nominations": 6,
                "numberOfReferences": 8855,
                "isBestPicture": true
            }]
        })
    );
}

/// minYear=2018&minAwards=3&sortBy=nominations&limit=4
#[test]
fn test_limit_then_sort_by_nominations() {
    let response = run(&[
        ("minYear", "2018"),
        ("minAwards", "3"),
        ("sortBy", "nominations"),
        ("limit", "4"),
    ]);

    assert_eq!(
        titles(&response),
        vec!["Bohemian Rhapsody", "Green Book", "Parasite", "Black Panther"]
    );
}

/// title=nonExisting serializes to an empty array.
#[test]
fn test_no_match_is_empty_array() {
    let response = run(&[("title", "nonExisting")]);
    assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"result":[]}"#);
}

/// isBestPicture=false&title=Zorba the Greek
#[test]
fn test_best_picture_and_title() {
    let response = run(&[("isBestPicture", "false"), ("title", "Zorba the Greek")]);
    assert_eq!(titles(&response), vec!["Zorba the Greek"]);

    let response = run(&[("isBestPicture", "true"), ("title", "Zorba the Greek")]);
    assert!(response.is_empty());
}

// =============================================================================
// Limit and Sort
// =============================================================================

/// Legacy mode: the first 12 matches in store order, re-sorted by year.
#[test]
fn test_limit_twelve_sorted_by_year_natural_order() {
    let response = run(&[
        ("minAwards", "4"),
        ("minYear", "2000"),
        ("sortBy", "year"),
        ("limit", "12"),
    ]);

    assert_eq!(
        titles(&response),
        vec![
            "Gladiator",
            "Chicago",
            "The Lord of the Rings: The Return of the King",
            "The Aviator",
            "Million Dollar Baby",
            "The Departed",
            "No Country for Old Men",
            "Slumdog Millionaire",
            "Inception",
            "The King's Speech",
            "Bohemian Rhapsody",
            "Parasite",
        ]
    );
}

/// Sorted mode: the 12 earliest matches overall.
#[test]
fn test_limit_twelve_sorted_by_year_sorted_order() {
    let response = api(LimitMode::SortedOrder)
        .query(
            "oscars",
            &[
                ("minAwards", "4"),
                ("minYear", "2000"),
                ("sortBy", "year"),
                ("limit", "12"),
            ],
        )
        .unwrap();

    assert_eq!(
        titles(&response),
        vec![
            "Gladiator",
            "Chicago",
            "The Lord of the Rings: The Return of the King",
            "The Aviator",
            "Million Dollar Baby",
            "The Departed",
            "No Country for Old Men",
            "Slumdog Millionaire",
            "Inception",
            "The King's Speech",
            "Hugo",
            "The Artist",
        ]
    );
}

/// Ties keep store order under every numeric sort key.
#[test]
fn test_numeric_sorts_are_stable() {
    let store = fixture_store();
    let natural: Vec<String> = store
        .candidates("oscars")
        .unwrap()
        .into_iter()
        .map(|f| f.title)
        .collect();
    let position = |title: &str| natural.iter().position(|t| t == title).unwrap();

    for key in ["year", "awards", "nominations"] {
        let response = run(&[("sortBy", key)]);
        let value = |i: usize| {
            let film = &response.result[i];
            match key {
                "year" => film.year,
                "awards" => film.awards,
                _ => film.nominations,
            }
        };

        for i in 1..response.len() {
            assert!(value(i - 1) <= value(i), "{} not ascending", key);
            if value(i - 1) == value(i) {
                assert!(
                    position(&response.result[i - 1].title) < position(&response.result[i].title),
                    "tie on {} reordered",
                    key
                );
            }
        }
    }
}

/// No parameters: every record, ordered by title.
#[test]
fn test_default_sort_by_title() {
    let response = run(&[]);
    let explicit = run(&[("sortBy", "title")]);

    assert_eq!(response.len(), 34);
    assert_eq!(titles(&response)[0], "12 Years a Slave");
    assert!(titles(&response).windows(2).all(|w| w[0] < w[1]));
    assert_eq!(titles(&response), titles(&explicit));
}

/// maxAwards=3&maxYear=2000&sortBy=awards
#[test]
fn test_upper_bounds_sorted_by_awards() {
    let response = run(&[("maxAwards", "3"), ("maxYear", "2000"), ("sortBy", "AWARDS")]);
    assert_eq!(titles(&response), vec!["Wings", "Zorba the Greek"]);
}

/// A record without numberOfReferences still projects all six keys.
#[test]
fn test_absent_field_projects_null() {
    let response = run(&[("title", "Wings")]);
    let value = serde_json::to_value(&response).unwrap();

    let entry = value["result"][0].as_object().unwrap();
    assert_eq!(entry.len(), 6);
    assert!(entry["numberOfReferences"].is_null());
    assert!(!entry.contains_key("jcr:primaryType"));
    assert!(!entry.contains_key("sling:resourceType"));
}

/// Explicit sort over a single record runs without error.
#[test]
fn test_explicit_sort_single_record() {
    let response = run(&[("title", "Parasite"), ("sortBy", "nominations")]);
    assert_eq!(titles(&response), vec!["Parasite"]);
}

#[test]
fn test_empty_container() {
    let response = api(LimitMode::NaturalOrder)
        .query::<&str, &str>("empty", &[])
        .unwrap();
    assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"result":[]}"#);
}

#[test]
fn test_unrecognized_parameters_ignored() {
    let response = run(&[("director", "Bong Joon-ho"), ("year", "2019")]);
    assert_eq!(titles(&response), vec!["Parasite"]);
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_unsupported_sort_key_fails() {
    let err = api(LimitMode::NaturalOrder)
        .query("oscars", &[("sortBy", "numberOfReferences")])
        .unwrap_err();

    match err {
        RestError::Query(e) => assert_eq!(e.code(), QueryErrorCode::UnsupportedSortKey),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_malformed_parameter_fails() {
    for params in [
        [("year", "2019.5")],
        [("minAwards", "many")],
        [("isBestPicture", "1")],
        [("limit", "-3")],
    ] {
        let err = api(LimitMode::NaturalOrder)
            .query("oscars", &params)
            .unwrap_err();
        match err {
            RestError::Query(e) => assert_eq!(e.code(), QueryErrorCode::MalformedParameter),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
