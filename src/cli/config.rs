//! Configuration file (`sheetdesk.json`)
//!
//! ```json
//! {
//!   "data_dir": "./data",
//!   "spreadsheet_id": "entries",
//!   "unique_value_columns": ["Status", "Owner"],
//!   "lock_timeout_ms": 30000,
//!   "http": { "host": "0.0.0.0", "port": 8787, "cors_origins": [] }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::sheet::SheetConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the spreadsheets (required)
    pub data_dir: String,

    #[serde(flatten)]
    pub sheet: SheetConfig,

    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        self.sheet
            .validate()
            .map_err(|e| CliError::config_error(e.to_string()))
    }

    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}
