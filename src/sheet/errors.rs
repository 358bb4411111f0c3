//! # Sheet Errors
//!
//! Every variant ends up as `{"status": "ERROR", "message": ...}` at the
//! request boundary.

use std::time::Duration;

use thiserror::Error;

use super::dispatcher::Action;
use crate::store::StoreError;

/// Result type for sheet operations
pub type SheetResult<T> = Result<T, SheetError>;

/// Sheet service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// Spreadsheet or its first sheet could not be opened
    #[error("Spreadsheet unavailable: {0}")]
    StoreUnavailable(StoreError),

    /// A required request parameter is absent
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// Action name not recognized
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// rowIndex missing, malformed or outside 2..=last row
    #[error("Invalid row index for {0}")]
    InvalidRowIndex(Action),

    /// The store failed while applying a mutation
    #[error("Error during {action}: {message}")]
    MutationFailed { action: Action, message: String },

    /// The write lock was not acquired in time
    #[error("Could not acquire write lock within {} ms", .0.as_millis())]
    LockTimeout(Duration),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SheetError {
    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            SheetError::StoreUnavailable(_) => "SHEET_STORE_UNAVAILABLE",
            SheetError::MissingParameter(_) => "SHEET_MISSING_PARAMETER",
            SheetError::InvalidAction(_) => "SHEET_INVALID_ACTION",
            SheetError::InvalidRowIndex(_) => "SHEET_INVALID_ROW_INDEX",
            SheetError::MutationFailed { .. } => "SHEET_MUTATION_FAILED",
            SheetError::LockTimeout(_) => "SHEET_LOCK_TIMEOUT",
            SheetError::InvalidConfig(_) => "SHEET_INVALID_CONFIG",
        }
    }

    /// True for errors raised before any mutation was attempted
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SheetError::MissingParameter(_)
                | SheetError::InvalidAction(_)
                | SheetError::InvalidRowIndex(_)
        )
    }
}
