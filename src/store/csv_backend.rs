//! # CSV Directory Backend
//!
//! A spreadsheet is the directory `<root>/<spreadsheet_id>/`; each `*.csv`
//! file inside it is one sheet, ordered by file name.

use std::fs;
use std::path::{Path, PathBuf};

use super::backend::{SheetBackend, SheetData};
use super::errors::{StoreError, StoreResult};

const SHEET_EXTENSION: &str = "csv";

/// CSV file spreadsheet backend
#[derive(Debug)]
pub struct CsvBackend {
    root: PathBuf,
}

impl CsvBackend {
    /// Create a backend rooted at the data directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn spreadsheet_dir(&self, spreadsheet_id: &str) -> PathBuf {
        self.root.join(spreadsheet_id)
    }

    fn sheet_path(&self, spreadsheet_id: &str, sheet: &str) -> PathBuf {
        self.spreadsheet_dir(spreadsheet_id)
            .join(format!("{}.{}", sheet, SHEET_EXTENSION))
    }

    fn write_rows(path: &Path, rows: &[Vec<String>]) -> StoreResult<()> {
        // Write beside the target, then rename over it
        let tmp_path = path.with_extension("csv.tmp");
        {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_path(&tmp_path)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl SheetBackend for CsvBackend {
    fn sheet_names(&self, spreadsheet_id: &str) -> StoreResult<Vec<String>> {
        let dir = self.spreadsheet_dir(spreadsheet_id);
        if !dir.is_dir() {
            return Err(StoreError::SpreadsheetNotFound(spreadsheet_id.to_string()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SHEET_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();

        Ok(names)
    }

    fn load_sheet(&self, spreadsheet_id: &str, sheet: &str) -> StoreResult<SheetData> {
        let path = self.sheet_path(spreadsheet_id, sheet);
        if !path.is_file() {
            return Err(StoreError::SheetNotFound {
                spreadsheet: spreadsheet_id.to_string(),
                sheet: sheet.to_string(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(SheetData::new(sheet, rows))
    }

    fn save_sheet(&self, spreadsheet_id: &str, sheet: &SheetData) -> StoreResult<()> {
        let path = self.sheet_path(spreadsheet_id, &sheet.name);
        if !path.is_file() {
            return Err(StoreError::SheetNotFound {
                spreadsheet: spreadsheet_id.to_string(),
                sheet: sheet.name.clone(),
            });
        }
        Self::write_rows(&path, &sheet.rows)
    }

    fn create(&self, spreadsheet_id: &str, sheet: &SheetData) -> StoreResult<()> {
        let dir = self.spreadsheet_dir(spreadsheet_id);
        if dir.exists() {
            return Err(StoreError::SpreadsheetAlreadyExists(
                spreadsheet_id.to_string(),
            ));
        }
        fs::create_dir_all(&dir)?;
        Self::write_rows(&self.sheet_path(spreadsheet_id, &sheet.name), &sheet.rows)
    }
}
