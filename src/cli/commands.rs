//! CLI command implementations

use std::path::Path;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::rest_api::{FilmApi, FilmListResponse};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
        Command::Query {
            config,
            container,
            params,
        } => {
            let response = query(&config, &container, &params)?;
            write_json(&response)
        }
    }
}

/// Boot the store and serve HTTP until the process exits
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    init_logging(&config.logging);

    let store = config.open_store()?;
    info!(
        content_file = %config.store.content_file.display(),
        reload_per_request = config.store.reload_per_request,
        limit_mode = config.query.limit_mode.as_str(),
        "store opened"
    );

    let server = HttpServer::new(
        config.http.clone(),
        FilmApi::new(store, config.query.limit_mode),
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
}

/// Run one query against the configured store
pub fn query(config_path: &Path, container: &str, params: &[String]) -> CliResult<FilmListResponse> {
    let config = Config::load(config_path)?;
    init_logging(&config.logging);

    let params = parse_params(params)?;
    let api = FilmApi::new(config.open_store()?, config.query.limit_mode);

    api.query(container, &params)
        .map_err(|e| CliError::query_failed(format!("{}: {}", e.code(), e)))
}

/// Split `name=value` arguments. The value may itself contain `=`.
fn parse_params(params: &[String]) -> CliResult<Vec<(String, String)>> {
    params
        .iter()
        .map(|param| {
            param
                .split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| {
                    CliError::invalid_argument(format!("expected NAME=VALUE, got {:?}", param))
                })
        })
        .collect()
}
