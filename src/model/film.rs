//! The film entry record
//!
//! Decoding is lenient in the way a content repository is: integers may
//! be stored as decimal strings or whole-number floats, and booleans as
//! `"true"`/`"false"`. A stored value that does not convert leaves the
//! field unset rather than failing the record.
//! Serialization always emits exactly the six public fields.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// A single film award entry.
///
/// Every field except `title` is optional. An absent field is unset,
/// not zero: a predicate that references it never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmEntry {
    /// Film title
    pub title: String,

    /// Ceremony year the film was nominated in
    #[serde(default, deserialize_with = "lenient_int")]
    pub year: Option<i32>,

    /// Number of awards won
    #[serde(default, deserialize_with = "lenient_int")]
    pub awards: Option<i32>,

    /// Number of nominations
    #[serde(default, deserialize_with = "lenient_int")]
    pub nominations: Option<i32>,

    /// Number of references to the film
    #[serde(default, deserialize_with = "lenient_int")]
    pub number_of_references: Option<i32>,

    /// Whether the film won best picture
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_best_picture: Option<bool>,
}

impl FilmEntry {
    /// Creates an entry with only a title set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            awards: None,
            nominations: None,
            number_of_references: None,
            is_best_picture: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_awards(mut self, awards: i32) -> Self {
        self.awards = Some(awards);
        self
    }

    pub fn with_nominations(mut self, nominations: i32) -> Self {
        self.nominations = Some(nominations);
        self
    }

    pub fn with_references(mut self, references: i32) -> Self {
        self.number_of_references = Some(references);
        self
    }

    pub fn with_best_picture(mut self, is_best_picture: bool) -> Self {
        self.is_best_picture = Some(is_best_picture);
        self
    }
}

/// Converts a stored value to an integer field. Whole-number floats and
/// decimal strings convert; anything else leaves the field unset.
fn stored_int(value: Value) -> Option<i32> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                .map(|f| f as i32),
        },
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn stored_bool(value: Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let converted = value.clone().and_then(stored_int);
    if converted.is_none() {
        if let Some(raw) = value.filter(|v| !v.is_null()) {
            trace!(value = %raw, "stored value is not an integer, leaving field unset");
        }
    }
    Ok(converted)
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let converted = value.clone().and_then(stored_bool);
    if converted.is_none() {
        if let Some(raw) = value.filter(|v| !v.is_null()) {
            trace!(value = %raw, "stored value is not a boolean, leaving field unset");
        }
    }
    Ok(converted)
}
