//! # Sheet Handle
//!
//! Row-level access to one sheet. Rows are addressed by their 1-based
//! physical position; row 1 is the header row.

use std::sync::Arc;

use super::backend::{SheetBackend, SheetData};
use super::errors::{StoreError, StoreResult};

/// An open sheet of a spreadsheet
#[derive(Debug, Clone)]
pub struct Sheet {
    backend: Arc<dyn SheetBackend>,
    spreadsheet_id: String,
    data: SheetData,
}

impl Sheet {
    pub(crate) fn new(backend: Arc<dyn SheetBackend>, spreadsheet_id: &str, data: SheetData) -> Self {
        Self {
            backend,
            spreadsheet_id: spreadsheet_id.to_string(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Physical number of the last row holding content (0 for an empty sheet)
    pub fn last_row(&self) -> usize {
        self.data.rows.len()
    }

    /// The header row, or nothing for an empty sheet
    pub fn header_row(&self) -> &[String] {
        self.data.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// All rows, header first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.data.rows
    }

    /// Display values of one row, padded to the header width
    pub fn row_values(&self, row: usize) -> StoreResult<Vec<String>> {
        let index = self.position(row)?;
        let mut values = self.data.rows[index].clone();
        let width = self.header_row().len();
        if values.len() < width {
            values.resize(width, String::new());
        }
        Ok(values)
    }

    /// Append a row after the last row, returning its row number
    pub fn append_row(&mut self, values: Vec<String>) -> StoreResult<usize> {
        let mut rows = self.data.rows.clone();
        rows.push(values);
        self.commit(rows)?;
        Ok(self.last_row())
    }

    /// Overwrite the cells of one row
    pub fn set_row_values(&mut self, row: usize, values: Vec<String>) -> StoreResult<()> {
        let index = self.position(row)?;
        let mut rows = self.data.rows.clone();
        rows[index] = values;
        self.commit(rows)
    }

    /// Remove one row; every later row moves up by one
    pub fn delete_row(&mut self, row: usize) -> StoreResult<()> {
        let index = self.position(row)?;
        let mut rows = self.data.rows.clone();
        rows.remove(index);
        self.commit(rows)
    }

    fn position(&self, row: usize) -> StoreResult<usize> {
        if row == 0 || row > self.last_row() {
            return Err(StoreError::RowOutOfRange {
                row,
                last_row: self.last_row(),
            });
        }
        Ok(row - 1)
    }

    /// The handle only changes once the backend has accepted the write
    fn commit(&mut self, rows: Vec<Vec<String>>) -> StoreResult<()> {
        let next = SheetData::new(self.data.name.clone(), rows);
        self.backend.save_sheet(&self.spreadsheet_id, &next)?;
        self.data = next;
        Ok(())
    }
}
