//! # Spreadsheet Backend Trait

use super::errors::StoreResult;

/// The full contents of one sheet: row 1 is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Sheet holding only a header row
    pub fn with_headers<I, S>(name: impl Into<String>, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, vec![headers.into_iter().map(Into::into).collect()])
    }
}

/// Backend trait for spreadsheet storage.
///
/// A spreadsheet is identified by an id and holds an ordered list of sheets.
/// Every `save_sheet` call is a committed write.
pub trait SheetBackend: Send + Sync + std::fmt::Debug {
    /// Names of the spreadsheet's sheets, in sheet order
    fn sheet_names(&self, spreadsheet_id: &str) -> StoreResult<Vec<String>>;

    /// Load one sheet
    fn load_sheet(&self, spreadsheet_id: &str, sheet: &str) -> StoreResult<SheetData>;

    /// Replace the stored contents of one sheet
    fn save_sheet(&self, spreadsheet_id: &str, sheet: &SheetData) -> StoreResult<()>;

    /// Create a new spreadsheet with a single sheet
    fn create(&self, spreadsheet_id: &str, sheet: &SheetData) -> StoreResult<()>;
}
