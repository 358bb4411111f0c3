//! Metrics registry for sheetdesk
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Request counters shared by the read and write paths
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    reads_served: AtomicU64,
    reads_failed: AtomicU64,
    writes_committed: AtomicU64,
    writes_rejected: AtomicU64,
    writes_failed: AtomicU64,
    lock_timeouts: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_reads_served(&self) {
        self.reads_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_reads_failed(&self) {
        self.reads_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_writes_committed(&self) {
        self.writes_committed.fetch_add(1, Ordering::Relaxed);
    }

    /// Writes refused before touching the store (bad action or row index)
    pub fn increment_writes_rejected(&self) {
        self.writes_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Writes that reached the store and failed, or found it unavailable
    pub fn increment_writes_failed(&self) {
        self.writes_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lock_timeouts(&self) {
        self.lock_timeouts.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reads_served: self.reads_served.load(Ordering::Relaxed),
            reads_failed: self.reads_failed.load(Ordering::Relaxed),
            writes_committed: self.writes_committed.load(Ordering::Relaxed),
            writes_rejected: self.writes_rejected.load(Ordering::Relaxed),
            writes_failed: self.writes_failed.load(Ordering::Relaxed),
            lock_timeouts: self.lock_timeouts.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub reads_served: u64,
    pub reads_failed: u64,
    pub writes_committed: u64,
    pub writes_rejected: u64,
    pub writes_failed: u64,
    pub lock_timeouts: u64,
}
