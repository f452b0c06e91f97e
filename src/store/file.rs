//! File-backed store that re-reads content on every request

use std::path::{Path, PathBuf};

use crate::model::FilmEntry;

use super::content::ContentStore;
use super::errors::StoreResult;
use super::source::RecordSource;

/// Reads and decodes the content file for every request.
///
/// Edits to the file are visible to the next request without a restart.
/// A file that cannot be read or decoded fails the request.
#[derive(Debug, Clone)]
pub struct FileContentStore {
    path: PathBuf,
}

impl FileContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileContentStore {
    fn candidates(&self, container: &str) -> StoreResult<Vec<FilmEntry>> {
        ContentStore::load(&self.path)?.candidates(container)
    }
}
