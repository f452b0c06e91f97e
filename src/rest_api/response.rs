//! # Response Formatting
//!
//! The film list body: `{"result": [...]}`.

use serde::Serialize;

use crate::model::FilmEntry;

/// Film list response.
///
/// Each entry carries exactly the six public fields. An empty result is
/// an empty array, never `null` and never a missing key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilmListResponse {
    pub result: Vec<FilmEntry>,
}

impl FilmListResponse {
    pub fn new(result: Vec<FilmEntry>) -> Self {
        Self { result }
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}
