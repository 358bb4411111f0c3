//! Table serializer
//!
//! Turns a sheet's raw rows into the JSON snapshot sent to clients.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::record::Record;

/// Full view of the table as returned by read and successful writes
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
    pub unique_values: UniqueValues,
}

/// Sorted distinct values per tracked column, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueValues(Vec<(String, Vec<String>)>);

impl UniqueValues {
    pub fn get(&self, column: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, values)| values.as_slice())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for UniqueValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (column, values) in &self.0 {
            map.serialize_entry(column, values)?;
        }
        map.end()
    }
}

/// Serialize a table given all of its rows (header first).
///
/// A table without data rows reports no headers and no rows.
pub fn serialize_table(rows: &[Vec<String>], tracked_columns: &[String]) -> TableSnapshot {
    let (headers, records) = match rows.split_first() {
        Some((header, data)) if !data.is_empty() => {
            let records = data
                .iter()
                .enumerate()
                .map(|(i, cells)| Record::from_row(i + 2, header, cells))
                .collect();
            (header.clone(), records)
        }
        _ => (Vec::new(), Vec::new()),
    };

    let unique_values = tracked_columns
        .iter()
        .map(|column| (column.clone(), distinct_values(rows, column)))
        .collect();

    TableSnapshot {
        headers,
        rows: records,
        unique_values: UniqueValues(unique_values),
    }
}

fn distinct_values(rows: &[Vec<String>], column: &str) -> Vec<String> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let Some(col) = header.iter().position(|h| h == column) else {
        return Vec::new();
    };

    data.iter()
        .filter_map(|row| row.get(col))
        .filter(|value| !value.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
