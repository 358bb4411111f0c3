//! Spreadsheet store for sheetdesk
//!
//! Provides access to the single backing table: the first sheet of the
//! spreadsheet named by the configured identifier.

mod backend;
mod csv_backend;
mod errors;
mod memory;
mod sheet;

use std::sync::Arc;

use crate::observability::{Event, Logger};

pub use backend::{SheetBackend, SheetData};
pub use csv_backend::CsvBackend;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryBackend;
pub use sheet::Sheet;

/// Open the first sheet of a spreadsheet.
///
/// Logs `SHEET_OPENED` on success and `SHEET_OPEN_FAILED` on failure.
pub fn open_table(backend: &Arc<dyn SheetBackend>, spreadsheet_id: &str) -> StoreResult<Sheet> {
    match open_first_sheet(backend, spreadsheet_id) {
        Ok(sheet) => {
            Logger::event(
                Event::SheetOpened,
                &[("sheet", sheet.name()), ("spreadsheet", spreadsheet_id)],
            );
            Ok(sheet)
        }
        Err(e) => {
            Logger::event(
                Event::SheetOpenFailed,
                &[
                    ("code", e.code()),
                    ("error", &e.to_string()),
                    ("spreadsheet", spreadsheet_id),
                ],
            );
            Err(e)
        }
    }
}

fn open_first_sheet(backend: &Arc<dyn SheetBackend>, spreadsheet_id: &str) -> StoreResult<Sheet> {
    let names = backend.sheet_names(spreadsheet_id)?;
    let first = names
        .first()
        .ok_or_else(|| StoreError::NoSheets(spreadsheet_id.to_string()))?;
    let data = backend.load_sheet(spreadsheet_id, first)?;
    Ok(Sheet::new(Arc::clone(backend), spreadsheet_id, data))
}
