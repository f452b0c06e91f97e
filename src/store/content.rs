//! In-memory content tree store

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::model::FilmEntry;

use super::errors::{StoreError, StoreResult};
use super::source::RecordSource;

/// A content tree loaded once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    containers: HashMap<String, Vec<FilmEntry>>,
}

impl ContentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from already decoded containers
    pub fn from_containers<I, S>(containers: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<FilmEntry>)>,
        S: Into<String>,
    {
        Self {
            containers: containers
                .into_iter()
                .map(|(name, entries)| (name.into(), entries))
                .collect(),
        }
    }

    /// Parses a content tree from a JSON string
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        Ok(Self {
            containers: parse_content_tree(json)?,
        })
    }

    /// Loads a content tree from a file
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::Unavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        let store = Self::from_json_str(&content)?;
        debug!(
            path = %path.display(),
            containers = ?store.container_names(),
            "content tree loaded"
        );
        Ok(store)
    }

    /// Container names, sorted
    pub fn container_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.containers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl RecordSource for ContentStore {
    fn candidates(&self, container: &str) -> StoreResult<Vec<FilmEntry>> {
        self.containers
            .get(container)
            .cloned()
            .ok_or_else(|| StoreError::ContainerNotFound(container.to_string()))
    }
}

/// Parses a content tree into containers of film entries.
///
/// Top-level object members are containers; their object-valued members
/// are entries, kept in document order. Scalar members at either level
/// are storage metadata and are skipped, as are namespaced child nodes
/// such as `jcr:content`.
pub fn parse_content_tree(json: &str) -> StoreResult<HashMap<String, Vec<FilmEntry>>> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| StoreError::InvalidContent(format!("not valid JSON: {}", e)))?;

    let root = match root {
        Value::Object(map) => map,
        _ => {
            return Err(StoreError::InvalidContent(
                "content root must be an object".to_string(),
            ))
        }
    };

    let mut containers = HashMap::new();
    for (name, node) in root {
        let Value::Object(children) = node else {
            continue;
        };

        let mut entries = Vec::new();
        for (child_name, child) in children {
            if !child.is_object() || child_name.contains(':') {
                continue;
            }
            let entry: FilmEntry = serde_json::from_value(child).map_err(|e| {
                StoreError::InvalidContent(format!("{}/{}: {}", name, child_name, e))
            })?;
            entries.push(entry);
        }
        containers.insert(name, entries);
    }

    Ok(containers)
}
