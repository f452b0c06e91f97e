//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load the content store and serve HTTP
//! - query: One-shot query printed as JSON

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{query, run, run_command, serve};
pub use config::{Config, QueryConfig, StoreConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
