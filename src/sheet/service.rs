//! # Sheet Service
//!
//! The read and write entry points behind `GET /` and `POST /`. Every outcome
//! is turned into a `SheetResponse`; nothing escapes as an error.

use std::sync::Arc;

use uuid::Uuid;

use super::config::SheetConfig;
use super::dispatcher::{self, Action, Params};
use super::errors::{SheetError, SheetResult};
use super::lock::WriteLock;
use super::response::SheetResponse;
use super::serializer::{serialize_table, TableSnapshot};
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::store::{self, Sheet, SheetBackend};

/// Parameter naming the write action
pub const ACTION_PARAM: &str = "action";

/// Mediates all access to the backing table
#[derive(Debug)]
pub struct SheetService {
    config: SheetConfig,
    backend: Arc<dyn SheetBackend>,
    write_lock: WriteLock,
    metrics: Arc<MetricsRegistry>,
}

impl SheetService {
    pub fn new(config: SheetConfig, backend: Arc<dyn SheetBackend>) -> Self {
        let write_lock = WriteLock::new(config.lock_timeout());
        Self {
            config,
            backend,
            write_lock,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    /// Share an existing metrics registry
    pub fn with_metrics(mut self, metrics: Arc<MetricsRegistry>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    pub fn write_lock(&self) -> &WriteLock {
        &self.write_lock
    }

    /// Open the table and serialize it
    pub fn snapshot(&self) -> SheetResult<TableSnapshot> {
        let sheet = self.open()?;
        Ok(serialize_table(
            sheet.rows(),
            &self.config.unique_value_columns,
        ))
    }

    /// Read path. Takes no lock.
    pub fn read(&self) -> SheetResponse {
        match self.snapshot() {
            Ok(snapshot) => {
                self.metrics.increment_reads_served();
                Logger::event(
                    Event::ReadComplete,
                    &[("rows", &snapshot.rows.len().to_string())],
                );
                SheetResponse::snapshot(snapshot)
            }
            Err(e) => {
                self.metrics.increment_reads_failed();
                Logger::event(
                    Event::ReadFailed,
                    &[("code", e.code()), ("error", &e.to_string())],
                );
                e.into()
            }
        }
    }

    /// Write path: `params["action"]` selects the mutation, the remaining
    /// parameters supply `rowIndex` and field values.
    ///
    /// On success the response carries a snapshot taken after the lock has
    /// been released.
    pub async fn write(&self, params: &Params) -> SheetResponse {
        let request_id = Uuid::new_v4().to_string();
        let action = params.get(ACTION_PARAM).map(String::as_str).unwrap_or("");

        let message = match self.apply_locked(action, params, &request_id).await {
            Ok(message) => message,
            Err(e) => {
                self.record_failure(&e, action, &request_id);
                return e.into();
            }
        };

        self.metrics.increment_writes_committed();
        Logger::event(
            Event::WriteCommit,
            &[
                ("action", action),
                ("message", &message),
                ("request_id", &request_id),
            ],
        );

        match self.snapshot() {
            Ok(snapshot) => SheetResponse::success(message, snapshot),
            Err(e) => {
                Logger::event(
                    Event::ReadFailed,
                    &[
                        ("code", e.code()),
                        ("error", &e.to_string()),
                        ("request_id", &request_id),
                    ],
                );
                e.into()
            }
        }
    }

    /// Everything between lock acquisition and release
    async fn apply_locked(
        &self,
        action: &str,
        params: &Params,
        request_id: &str,
    ) -> SheetResult<String> {
        let _guard = self.write_lock.acquire().await?;
        Logger::event(
            Event::WriteBegin,
            &[("action", action), ("request_id", request_id)],
        );

        if action.is_empty() {
            return Err(SheetError::MissingParameter(ACTION_PARAM));
        }
        let action: Action = action.parse()?;
        let mut sheet = self.open()?;
        dispatcher::apply(&mut sheet, action, params)
    }

    fn open(&self) -> SheetResult<Sheet> {
        store::open_table(&self.backend, &self.config.spreadsheet_id)
            .map_err(SheetError::StoreUnavailable)
    }

    fn record_failure(&self, err: &SheetError, action: &str, request_id: &str) {
        let event = match err {
            SheetError::LockTimeout(_) => {
                self.metrics.increment_lock_timeouts();
                Event::LockTimeout
            }
            e if e.is_validation() => {
                self.metrics.increment_writes_rejected();
                Event::WriteRejected
            }
            _ => {
                self.metrics.increment_writes_failed();
                Event::WriteFailed
            }
        };
        Logger::event(
            event,
            &[
                ("action", action),
                ("code", err.code()),
                ("error", &err.to_string()),
                ("request_id", request_id),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Status;
    use crate::store::{MemoryBackend, SheetData};
    use std::time::Duration;

    fn make_service(rows: Vec<Vec<&str>>) -> (Arc<MemoryBackend>, SheetService) {
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(String::from).collect())
            .collect();
        let backend = Arc::new(MemoryBackend::with_spreadsheet(
            "book",
            vec![SheetData::new("Entries", rows)],
        ));
        let config = SheetConfig::new("book")
            .with_unique_value_columns(["Status"])
            .with_lock_timeout(Duration::from_millis(50));
        (backend.clone(), SheetService::new(config, backend))
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_read_unavailable_store() {
        let backend = Arc::new(MemoryBackend::new());
        let service = SheetService::new(SheetConfig::new("missing"), backend);

        let response = service.read();
        assert_eq!(response.status, Status::Error);
        assert!(response.snapshot.is_none());
        assert_eq!(service.metrics().snapshot().reads_failed, 1);
    }

    #[tokio::test]
    async fn test_write_returns_fresh_snapshot() {
        let (_, service) = make_service(vec![vec!["Name", "Status"]]);

        let response = service
            .write(&params(&[("action", "create"), ("Name", "Ada"), ("Status", "open")]))
            .await;

        assert!(response.is_success());
        let snapshot = response.snapshot.unwrap();
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.unique_values.get("Status").unwrap(), ["open"]);
        assert_eq!(service.metrics().snapshot().writes_committed, 1);
    }

    #[tokio::test]
    async fn test_missing_action() {
        let (_, service) = make_service(vec![vec!["Name"]]);
        let response = service.write(&Params::new()).await;

        assert_eq!(
            response,
            SheetResponse::error("Missing required parameter: action")
        );
        assert_eq!(service.metrics().snapshot().writes_rejected, 1);
    }

    #[tokio::test]
    async fn test_lock_released_after_failure() {
        let (backend, service) = make_service(vec![vec!["Name"], vec!["a"]]);
        backend.set_read_only(true);

        let response = service
            .write(&params(&[("action", "delete"), ("rowIndex", "2")]))
            .await;
        assert_eq!(response.status, Status::Error);
        assert!(!service.write_lock().is_locked());
        assert_eq!(service.metrics().snapshot().writes_failed, 1);
    }

    #[tokio::test]
    async fn test_lock_timeout() {
        let (_, service) = make_service(vec![vec!["Name"]]);
        let _held = service.write_lock().acquire().await.unwrap();

        let response = service
            .write(&params(&[("action", "create"), ("Name", "x")]))
            .await;
        assert_eq!(
            response,
            SheetResponse::error("Could not acquire write lock within 50 ms")
        );
        assert_eq!(service.metrics().snapshot().lock_timeouts, 1);
    }
}
