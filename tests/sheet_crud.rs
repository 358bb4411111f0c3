//! CRUD contract tests against a CSV-backed spreadsheet
//!
//! Every write goes through `SheetService::write`, and every assertion reads
//! the table back through `SheetService::read` or straight from the backend.

use std::sync::Arc;

use sheetdesk::sheet::{Params, SheetConfig, SheetResponse, SheetService, Status, TableSnapshot};
use sheetdesk::store::{CsvBackend, SheetBackend, SheetData};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

const SPREADSHEET: &str = "entries";

fn seeded_service(temp: &TempDir, rows: &[&[&str]]) -> SheetService {
    let backend = CsvBackend::new(temp.path());
    let mut all_rows = rows.iter();
    let header = all_rows.next().expect("header row");
    backend
        .create(SPREADSHEET, &SheetData::with_headers("Sheet1", header.iter().copied()))
        .unwrap();
    let mut data = backend.load_sheet(SPREADSHEET, "Sheet1").unwrap();
    data.rows
        .extend(all_rows.map(|r| r.iter().map(|c| c.to_string()).collect()));
    backend.save_sheet(SPREADSHEET, &data).unwrap();

    let config = SheetConfig::new(SPREADSHEET).with_unique_value_columns(["Status", "Owner"]);
    SheetService::new(config, Arc::new(backend))
}

fn default_service(temp: &TempDir) -> SheetService {
    seeded_service(
        temp,
        &[
            &["Name", "Status", "Owner"],
            &["Alpha", "open", "kim"],
            &["Bravo", "closed", "lee"],
            &["Charlie", "open", ""],
        ],
    )
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn read(service: &SheetService) -> TableSnapshot {
    let response = service.read();
    assert_eq!(response.status, Status::Success, "read failed: {:?}", response.message);
    response.snapshot.expect("snapshot")
}

fn names(snapshot: &TableSnapshot) -> Vec<(usize, String)> {
    snapshot
        .rows
        .iter()
        .map(|r| (r.row_index(), r.get("Name").unwrap_or_default().to_string()))
        .collect()
}

fn assert_error(response: &SheetResponse, expected: &str) {
    assert_eq!(response.status, Status::Error);
    assert_eq!(response.message.as_deref(), Some(expected));
    assert!(response.snapshot.is_none(), "errors carry no snapshot");
}

// =============================================================================
// Read
// =============================================================================

#[test]
fn test_read_returns_headers_rows_and_unique_values() {
    let temp = TempDir::new().unwrap();
    let service = default_service(&temp);

    let snapshot = read(&service);
    assert_eq!(snapshot.headers, vec!["Name", "Status", "Owner"]);
    assert_eq!(
        names(&snapshot),
        vec![(2, "Alpha".into()), (3, "Bravo".into()), (4, "Charlie".into())]
    );
    assert_eq!(snapshot.unique_values.get("Status").unwrap(), ["closed", "open"]);
    assert_eq!(snapshot.unique_values.get("Owner").unwrap(), ["kim", "lee"]);
}

#[test]
fn test_read_fails_when_spreadsheet_missing() {
    let temp = TempDir::new().unwrap();
    let service = SheetService::new(
        SheetConfig::new("nowhere"),
        Arc::new(CsvBackend::new(temp.path())),
    );

    let response = service.read();
    assert_eq!(response.status, Status::Error);
    assert!(response.message.unwrap().starts_with("Spreadsheet unavailable"));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_appends_at_last_row_plus_one() {
    let temp = TempDir::new().unwrap();
    let service = default_service(&temp);

    let response = service
        .write(&params(&[("action", "create"), ("Name", "Delta"), ("Status", "blocked")]))
        .await;

    assert_eq!(response.status, Status::Success);
    let snapshot = response.snapshot.unwrap();
    let created = snapshot.rows.last().unwrap();
    assert_eq!(created.row_index(), 5);
    assert_eq!(created.get("Name"), Some("Delta"));
    assert_eq!(created.get("Status"), Some("blocked"));
    assert_eq!(created.get("Owner"), Some(""));
    assert_eq!(
        snapshot.unique_values.get("Status").unwrap(),
        ["blocked", "closed", "open"]
    );
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_replaces_every_field() {
    let temp = TempDir::new().unwrap();
    let service = default_service(&temp);

    let response = service
        .write(&params(&[("action", "update"), ("rowIndex", "3"), ("Name", "Bravo2")]))
        .await;
    assert_eq!(response.status, Status::Success);

    let snapshot = read(&service);
    let row = snapshot.rows.iter().find(|r| r.row_index() == 3).unwrap();
    assert_eq!(row.get("Name"), Some("Bravo2"));
    assert_eq!(row.get("Status"), Some(""));
    assert_eq!(row.get("Owner"), Some(""));
    // "closed" and "lee" only appeared in the overwritten row
    assert_eq!(snapshot.unique_values.get("Status").unwrap(), ["open"]);
    assert_eq!(snapshot.unique_values.get("Owner").unwrap(), ["kim"]);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_shifts_later_rows_up() {
    let temp = TempDir::new().unwrap();
    let service = default_service(&temp);

    let response = service
        .write(&params(&[("action", "delete"), ("rowIndex", "2")]))
        .await;
    assert_eq!(response.status, Status::Success);

    let snapshot = read(&service);
    assert_eq!(
        names(&snapshot),
        vec![(2, "Bravo".into()), (3, "Charlie".into())]
    );
}

#[tokio::test]
async fn test_delete_last_data_row_leaves_empty_table() {
    let temp = TempDir::new().unwrap();
    let service = seeded_service(&temp, &[&["Name", "Status"], &["Only", "open"]]);

    let response = service
        .write(&params(&[("action", "delete"), ("rowIndex", "2")]))
        .await;
    assert_eq!(response.status, Status::Success);

    let snapshot = response.snapshot.unwrap();
    assert!(snapshot.headers.is_empty());
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.unique_values.get("Status").unwrap().is_empty());
}

// =============================================================================
// Duplicate
// =============================================================================

#[tokio::test]
async fn test_duplicate_appends_copy_and_keeps_original() {
    let temp = TempDir::new().unwrap();
    let service = default_service(&temp);

    let response = service
        .write(&params(&[("action", "duplicate"), ("rowIndex", "3"), ("Name", "ignored")]))
        .await;
    assert_eq!(response.status, Status::Success);

    let snapshot = read(&service);
    let original = snapshot.rows.iter().find(|r| r.row_index() == 3).unwrap();
    let copy = snapshot.rows.last().unwrap();
    assert_eq!(copy.row_index(), 5);
    assert_eq!(
        copy.fields().map(|(_, v)| v).collect::<Vec<_>>(),
        original.fields().map(|(_, v)| v).collect::<Vec<_>>()
    );
    assert_eq!(original.get("Name"), Some("Bravo"));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_invalid_row_index_leaves_table_unchanged() {
    let temp = TempDir::new().unwrap();
    let service = default_service(&temp);
    let before = read(&service);

    for action in ["update", "delete", "duplicate"] {
        for raw in ["0", "1", "-1", "abc", "5", ""] {
            let response = service
                .write(&params(&[("action", action), ("rowIndex", raw), ("Name", "X")]))
                .await;
            assert_error(&response, &format!("Invalid row index for {}", action));
        }
        let response = service.write(&params(&[("action", action)])).await;
        assert_error(&response, &format!("Invalid row index for {}", action));
    }

    assert_eq!(read(&service), before);
}

#[tokio::test]
async fn test_unknown_action_is_rejected() {
    let temp = TempDir::new().unwrap();
    let service = default_service(&temp);
    let before = read(&service);

    let response = service
        .write(&params(&[("action", "archive"), ("rowIndex", "2")]))
        .await;

    assert_error(&response, "Invalid action: archive");
    assert_eq!(read(&service), before);
}

#[tokio::test]
async fn test_write_to_missing_spreadsheet() {
    let temp = TempDir::new().unwrap();
    let service = SheetService::new(
        SheetConfig::new("nowhere"),
        Arc::new(CsvBackend::new(temp.path())),
    );

    let response = service
        .write(&params(&[("action", "create"), ("Name", "x")]))
        .await;
    assert_eq!(response.status, Status::Error);
    assert!(response.message.unwrap().starts_with("Spreadsheet unavailable"));
    assert!(!service.write_lock().is_locked());
}
