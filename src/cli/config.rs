//! Configuration file
//!
//! ```json
//! {
//!   "http": { "host": "127.0.0.1", "port": 8080, "cors_origins": [] },
//!   "store": { "content_file": "oscars.json", "reload_per_request": false },
//!   "query": { "limit_mode": "natural_order" },
//!   "logging": { "level": "info", "format": "text" }
//! }
//! ```
//!
//! Only `store.content_file` is required. A relative content path is
//! resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::executor::LimitMode;
use crate::http_server::HttpServerConfig;
use crate::observability::LoggingConfig;
use crate::store::{ContentStore, FileContentStore, RecordSource};

use super::errors::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    pub store: StoreConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON content tree (required)
    pub content_file: PathBuf,

    /// Re-read the content file on every request (default: false)
    #[serde(default)]
    pub reload_per_request: bool,
}

/// Query engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Where the limit applies relative to the sort (default: natural_order)
    #[serde(default)]
    pub limit_mode: LimitMode,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut config = Self::from_json_str(&content)?;

        if config.store.content_file.is_relative() {
            if let Some(dir) = path.parent() {
                config.store.content_file = dir.join(&config.store.content_file);
            }
        }

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json_str(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.store.content_file.as_os_str().is_empty() {
            return Err(CliError::config_error("store.content_file must not be empty"));
        }

        Ok(())
    }

    /// Opens the configured record source.
    ///
    /// The content file is read once here even when reloading per
    /// request, so a bad path fails at boot rather than on first query.
    pub fn open_store(&self) -> CliResult<Arc<dyn RecordSource>> {
        let path = &self.store.content_file;
        let store = ContentStore::load(path).map_err(|e| CliError::boot_failed(e.to_string()))?;

        if self.store.reload_per_request {
            Ok(Arc::new(FileContentStore::new(path)))
        } else {
            Ok(Arc::new(store))
        }
    }
}
