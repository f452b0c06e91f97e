//! CLI argument definitions using clap
//!
//! Commands:
//! - filmquery serve --config <path>
//! - filmquery query --config <path> --container <name> [--param k=v]...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filmquery - deterministic queries over film award entries
#[derive(Parser, Debug)]
#[command(name = "filmquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./filmquery.json")]
        config: PathBuf,
    },

    /// Execute a single query and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./filmquery.json")]
        config: PathBuf,

        /// Container to query
        #[arg(long)]
        container: String,

        /// Query parameter as name=value, repeatable
        #[arg(long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
