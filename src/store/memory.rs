//! # In-Memory Backend

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::backend::{SheetBackend, SheetData};
use super::errors::{StoreError, StoreResult};

/// Spreadsheets held in process memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    spreadsheets: RwLock<HashMap<String, Vec<SheetData>>>,
    read_only: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend holding one spreadsheet
    pub fn with_spreadsheet(spreadsheet_id: &str, sheets: Vec<SheetData>) -> Self {
        let backend = Self::new();
        backend.insert(spreadsheet_id, sheets);
        backend
    }

    /// Insert or replace a spreadsheet (any number of sheets, including none)
    pub fn insert(&self, spreadsheet_id: &str, sheets: Vec<SheetData>) {
        self.spreadsheets
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(spreadsheet_id.to_string(), sheets);
    }

    /// Reject every save while set
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl SheetBackend for MemoryBackend {
    fn sheet_names(&self, spreadsheet_id: &str) -> StoreResult<Vec<String>> {
        let spreadsheets = self
            .spreadsheets
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let sheets = spreadsheets
            .get(spreadsheet_id)
            .ok_or_else(|| StoreError::SpreadsheetNotFound(spreadsheet_id.to_string()))?;
        Ok(sheets.iter().map(|s| s.name.clone()).collect())
    }

    fn load_sheet(&self, spreadsheet_id: &str, sheet: &str) -> StoreResult<SheetData> {
        let spreadsheets = self
            .spreadsheets
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        spreadsheets
            .get(spreadsheet_id)
            .ok_or_else(|| StoreError::SpreadsheetNotFound(spreadsheet_id.to_string()))?
            .iter()
            .find(|s| s.name == sheet)
            .cloned()
            .ok_or_else(|| StoreError::SheetNotFound {
                spreadsheet: spreadsheet_id.to_string(),
                sheet: sheet.to_string(),
            })
    }

    fn save_sheet(&self, spreadsheet_id: &str, sheet: &SheetData) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::ReadOnly(spreadsheet_id.to_string()));
        }

        let mut spreadsheets = self
            .spreadsheets
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let slot = spreadsheets
            .get_mut(spreadsheet_id)
            .ok_or_else(|| StoreError::SpreadsheetNotFound(spreadsheet_id.to_string()))?
            .iter_mut()
            .find(|s| s.name == sheet.name)
            .ok_or_else(|| StoreError::SheetNotFound {
                spreadsheet: spreadsheet_id.to_string(),
                sheet: sheet.name.clone(),
            })?;
        *slot = sheet.clone();
        Ok(())
    }

    fn create(&self, spreadsheet_id: &str, sheet: &SheetData) -> StoreResult<()> {
        let mut spreadsheets = self
            .spreadsheets
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if spreadsheets.contains_key(spreadsheet_id) {
            return Err(StoreError::SpreadsheetAlreadyExists(
                spreadsheet_id.to_string(),
            ));
        }
        spreadsheets.insert(spreadsheet_id.to_string(), vec![sheet.clone()]);
        Ok(())
    }
}
