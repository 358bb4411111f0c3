//! Mutation dispatcher
//!
//! Maps an action name plus flat string parameters onto one row mutation.
//! Callers must hold the write lock.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::errors::{SheetError, SheetResult};
use crate::store::{Sheet, StoreError};

/// Flat request parameters: field values keyed by column name, plus
/// `action` and `rowIndex`
pub type Params = HashMap<String, String>;

/// Parameter naming the row an update/delete/duplicate targets
pub const ROW_INDEX_PARAM: &str = "rowIndex";

/// First row that holds data; row 1 is the header
const FIRST_DATA_ROW: usize = 2;

/// Write actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
    Duplicate,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "duplicate" => Ok(Action::Duplicate),
            other => Err(SheetError::InvalidAction(other.to_string())),
        }
    }
}

/// Apply one action to the sheet, returning the success message.
///
/// Validation failures leave the sheet untouched. A store failure during the
/// mutation is reported as `MutationFailed`.
pub fn apply(sheet: &mut Sheet, action: Action, params: &Params) -> SheetResult<String> {
    match action {
        Action::Create => {
            if sheet.header_row().is_empty() {
                return Err(SheetError::MutationFailed {
                    action,
                    message: format!("Sheet '{}' has no header row", sheet.name()),
                });
            }
            let values = build_row(sheet.header_row(), params);
            let row = sheet
                .append_row(values)
                .map_err(|e| mutation_failed(action, e))?;
            Ok(format!("Record created at row {}", row))
        }
        Action::Update => {
            let row = target_row(sheet, action, params)?;
            let values = build_row(sheet.header_row(), params);
            sheet
                .set_row_values(row, values)
                .map_err(|e| mutation_failed(action, e))?;
            Ok(format!("Row {} updated", row))
        }
        Action::Delete => {
            let row = target_row(sheet, action, params)?;
            sheet
                .delete_row(row)
                .map_err(|e| mutation_failed(action, e))?;
            Ok(format!("Row {} deleted", row))
        }
        Action::Duplicate => {
            let row = target_row(sheet, action, params)?;
            let new_row = sheet
                .row_values(row)
                .and_then(|values| sheet.append_row(values))
                .map_err(|e| mutation_failed(action, e))?;
            Ok(format!("Row {} duplicated to row {}", row, new_row))
        }
    }
}

/// One cell per header, taken from the parameter of the same name
fn build_row(headers: &[String], params: &Params) -> Vec<String> {
    headers
        .iter()
        .map(|header| params.get(header).cloned().unwrap_or_default())
        .collect()
}

/// Parse `rowIndex` and check it addresses an existing data row
fn target_row(sheet: &Sheet, action: Action, params: &Params) -> SheetResult<usize> {
    params
        .get(ROW_INDEX_PARAM)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|row| (FIRST_DATA_ROW..=sheet.last_row()).contains(row))
        .ok_or(SheetError::InvalidRowIndex(action))
}

fn mutation_failed(action: Action, err: StoreError) -> SheetError {
    SheetError::MutationFailed {
        action,
        message: err.to_string(),
    }
}
