//! CLI module for sheetdesk
//!
//! Provides command-line interface for:
//! - init: Create the backing spreadsheet
//! - serve: Run the HTTP server
//! - snapshot: Print the table once

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve, snapshot};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
