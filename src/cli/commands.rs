//! CLI command implementations

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::http_server::HttpServer;
use crate::observability::{Event, Logger};
use crate::sheet::SheetService;
use crate::store::{CsvBackend, SheetBackend, SheetData, StoreError};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init {
            config,
            headers,
            sheet,
        } => init(&config, &headers, &sheet),
        Command::Serve { config, port } => serve(&config, port),
        Command::Snapshot { config } => snapshot(&config),
    }
}

fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    Logger::event(
        Event::ConfigLoaded,
        &[
            ("data_dir", &config.data_dir),
            ("spreadsheet", &config.sheet.spreadsheet_id),
        ],
    );
    Ok(config)
}

fn build_service(config: &Config) -> SheetService {
    let backend: Arc<dyn SheetBackend> = Arc::new(CsvBackend::new(config.data_path()));
    SheetService::new(config.sheet.clone(), backend)
}

/// Create the configured spreadsheet with a single sheet holding the header row
pub fn init(config_path: &Path, headers: &[String], sheet: &str) -> CliResult<()> {
    let config = load_config(config_path)?;
    validate_headers(headers)?;

    let spreadsheet_id = &config.sheet.spreadsheet_id;
    let backend = CsvBackend::new(config.data_path());
    backend
        .create(spreadsheet_id, &SheetData::with_headers(sheet, headers.iter().cloned()))
        .map_err(|e| match e {
            StoreError::SpreadsheetAlreadyExists(id) => CliError::already_initialized(&id),
            other => CliError::store_error(other.to_string()),
        })?;

    Logger::event(
        Event::SpreadsheetCreated,
        &[("sheet", sheet), ("spreadsheet", spreadsheet_id)],
    );
    write_json(&json!({
        "initialized": true,
        "spreadsheet_id": spreadsheet_id,
        "sheet": sheet,
        "headers": headers,
    }))
}

fn validate_headers(headers: &[String]) -> CliResult<()> {
    if headers.is_empty() {
        return Err(CliError::config_error("At least one header is required"));
    }

    let mut seen = HashSet::new();
    for header in headers {
        if header.trim().is_empty() {
            return Err(CliError::config_error("Header names must not be empty"));
        }
        if !seen.insert(header.as_str()) {
            return Err(CliError::config_error(format!(
                "Duplicate header: '{}'",
                header
            )));
        }
    }

    Ok(())
}

/// Serve `GET /` and `POST /` until the process is stopped
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    let service = Arc::new(build_service(&config));
    let server = HttpServer::new(config.http.clone(), service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the read response once
pub fn snapshot(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let response = build_service(&config).read();

    if !response.is_success() {
        let message = response.message.unwrap_or_default();
        return Err(CliError::store_error(message));
    }

    write_json(&response)
}
