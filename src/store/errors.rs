//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a spreadsheet backend or a sheet handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    #[error("Spreadsheet already exists: {0}")]
    SpreadsheetAlreadyExists(String),

    #[error("Spreadsheet has no sheets: {0}")]
    NoSheets(String),

    #[error("Sheet '{sheet}' not found in spreadsheet '{spreadsheet}'")]
    SheetNotFound { spreadsheet: String, sheet: String },

    #[error("Row {row} is out of range (last row: {last_row})")]
    RowOutOfRange { row: usize, last_row: usize },

    #[error("Spreadsheet is read-only: {0}")]
    ReadOnly(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl StoreError {
    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::SpreadsheetNotFound(_) => "STORE_SPREADSHEET_NOT_FOUND",
            StoreError::SpreadsheetAlreadyExists(_) => "STORE_SPREADSHEET_EXISTS",
            StoreError::NoSheets(_) => "STORE_NO_SHEETS",
            StoreError::SheetNotFound { .. } => "STORE_SHEET_NOT_FOUND",
            StoreError::RowOutOfRange { .. } => "STORE_ROW_OUT_OF_RANGE",
            StoreError::ReadOnly(_) => "STORE_READ_ONLY",
            StoreError::Io(_) => "STORE_IO_ERROR",
            StoreError::Csv(_) => "STORE_CSV_ERROR",
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        StoreError::Csv(e.to_string())
    }
}
