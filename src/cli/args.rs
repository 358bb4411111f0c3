//! CLI argument definitions using clap
//!
//! Commands:
//! - sheetdesk init --config <path> --headers <a,b,c>
//! - sheetdesk serve --config <path> [--port <port>]
//! - sheetdesk snapshot --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sheetdesk - a spreadsheet-backed data-entry backend
#[derive(Parser, Debug)]
#[command(name = "sheetdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the backing spreadsheet with a header row
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./sheetdesk.json")]
        config: PathBuf,

        /// Column names for the header row
        #[arg(long, value_delimiter = ',', required = true)]
        headers: Vec<String>,

        /// Name of the sheet to create
        #[arg(long, default_value = "Sheet1")]
        sheet: String,
    },

    /// Serve the table over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./sheetdesk.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the current table snapshot as JSON and exit
    Snapshot {
        /// Path to configuration file
        #[arg(long, default_value = "./sheetdesk.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
