//! Sheet service configuration

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::{SheetError, SheetResult};

/// Which spreadsheet backs the service and how writes are guarded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Identifier of the backing spreadsheet; its first sheet is the table
    pub spreadsheet_id: String,

    /// Columns whose distinct values are reported with every snapshot
    #[serde(default)]
    pub unique_value_columns: Vec<String>,

    /// Longest wait for the write lock, in milliseconds (default: 30000)
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

fn default_lock_timeout_ms() -> u64 {
    30_000
}

impl SheetConfig {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            unique_value_columns: Vec::new(),
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }

    pub fn with_unique_value_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_value_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }

    pub fn validate(&self) -> SheetResult<()> {
        let id = self.spreadsheet_id.trim();
        if id.is_empty() {
            return Err(SheetError::InvalidConfig(
                "spreadsheet_id must not be empty".to_string(),
            ));
        }
        if id.contains('/') || id.contains('\\') || id.contains("..") {
            return Err(SheetError::InvalidConfig(format!(
                "spreadsheet_id '{}' must not contain path separators",
                self.spreadsheet_id
            )));
        }

        if self.lock_timeout_ms == 0 {
            return Err(SheetError::InvalidConfig(
                "lock_timeout_ms must be > 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.unique_value_columns {
            if !seen.insert(column.as_str()) {
                return Err(SheetError::InvalidConfig(format!(
                    "unique_value_columns lists '{}' more than once",
                    column
                )));
            }
        }

        Ok(())
    }
}
