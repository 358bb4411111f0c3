//! Concurrent write tests
//!
//! Writes load the whole sheet, change it and save it back, so any
//! interleaving of two writes would lose one of them.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use sheetdesk::sheet::{Params, SheetConfig, SheetService, Status};
use sheetdesk::store::{CsvBackend, MemoryBackend, SheetBackend, SheetData};
use tempfile::TempDir;

fn create_params(name: &str) -> Params {
    [("action", "create"), ("Name", name)]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_all_kept() {
    let temp = TempDir::new().unwrap();
    let backend = CsvBackend::new(temp.path());
    backend
        .create("entries", &SheetData::with_headers("Sheet1", ["Name"]))
        .unwrap();
    let service = Arc::new(SheetService::new(
        SheetConfig::new("entries"),
        Arc::new(backend),
    ));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.write(&create_params(&format!("n{:02}", i))).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().status, Status::Success);
    }

    let snapshot = service.snapshot().unwrap();
    let names: BTreeSet<_> = snapshot
        .rows
        .iter()
        .map(|r| r.get("Name").unwrap().to_string())
        .collect();
    let expected: BTreeSet<_> = (0..32).map(|i| format!("n{:02}", i)).collect();
    assert_eq!(names, expected);

    let indices: Vec<_> = snapshot.rows.iter().map(|r| r.row_index()).collect();
    assert_eq!(indices, (2..34).collect::<Vec<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_delete_and_create_serialize() {
    let rows = vec![
        vec!["Name".to_string()],
        vec!["a".to_string()],
        vec!["b".to_string()],
    ];
    let backend = Arc::new(MemoryBackend::with_spreadsheet(
        "entries",
        vec![SheetData::new("Sheet1", rows)],
    ));
    let service = Arc::new(SheetService::new(
        SheetConfig::new("entries"),
        backend.clone() as Arc<dyn SheetBackend>,
    ));

    let delete_params: Params = [("action", "delete"), ("rowIndex", "2")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let s1 = Arc::clone(&service);
    let s2 = Arc::clone(&service);
    let (deleted, created) = tokio::join!(
        tokio::spawn(async move { s1.write(&delete_params).await }),
        tokio::spawn(async move { s2.write(&create_params("c")).await }),
    );
    assert_eq!(deleted.unwrap().status, Status::Success);
    assert_eq!(created.unwrap().status, Status::Success);

    // Either order ends with the same table
    let stored = backend.load_sheet("entries", "Sheet1").unwrap();
    assert_eq!(
        stored.rows,
        vec![vec!["Name"], vec!["b"], vec!["c"]]
    );
}

#[tokio::test]
async fn test_waiting_writer_times_out_then_recovers() {
    let backend = Arc::new(MemoryBackend::with_spreadsheet(
        "entries",
        vec![SheetData::with_headers("Sheet1", ["Name"])],
    ));
    let service = SheetService::new(
        SheetConfig::new("entries").with_lock_timeout(Duration::from_millis(30)),
        backend,
    );

    {
        let _held = service.write_lock().acquire().await.unwrap();
        let response = service.write(&create_params("late")).await;
        assert_eq!(response.status, Status::Error);
        assert_eq!(
            response.message.as_deref(),
            Some("Could not acquire write lock within 30 ms")
        );
    }

    let response = service.write(&create_params("on time")).await;
    assert_eq!(response.status, Status::Success);
    assert_eq!(service.snapshot().unwrap().rows.len(), 1);
}
