//! Row views
//!
//! The set of columns is only known once the header row has been read, so a
//! record is an ordered list of `(column, value)` pairs rather than a struct.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One data row as column name → display value, plus its physical row number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    row_index: usize,
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(row_index: usize) -> Self {
        Self {
            row_index,
            fields: Vec::new(),
        }
    }

    /// Build a record by pairing headers with a row's cells; missing cells are ""
    pub fn from_row(row_index: usize, headers: &[String], cells: &[String]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let value = cells.get(col).cloned().unwrap_or_default();
                (header.clone(), value)
            })
            .collect();
        Self { row_index, fields }
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Fields in header order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `{"rowIndex": n, "<column>": "<value>", ...}` in header order
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("rowIndex", &self.row_index)?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_from_row_fills_missing_cells() {
        let record = Record::from_row(3, &strings(&["Name", "City"]), &strings(&["Ada"]));
        assert_eq!(record.row_index(), 3);
        assert_eq!(record.get("Name"), Some("Ada"));
        assert_eq!(record.get("City"), Some(""));
        assert_eq!(record.get("Zip"), None);
    }

    #[test]
    fn test_serializes_row_index_first_in_header_order() {
        let mut record = Record::new(2);
        record.push("Zeta", "z");
        record.push("Alpha", "a");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"rowIndex":2,"Zeta":"z","Alpha":"a"}"#);
    }
}
