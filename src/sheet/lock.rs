//! Write lock
//!
//! A single async mutex serializes every write. Acquisition waits at most the
//! configured timeout; the returned guard releases the lock when dropped.

use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};

use super::errors::{SheetError, SheetResult};

#[derive(Debug)]
pub struct WriteLock {
    inner: Mutex<()>,
    timeout: Duration,
}

/// Holds the write lock until dropped
#[derive(Debug)]
pub struct WriteGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl WriteLock {
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: Mutex::new(()),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Wait for the lock, failing with `LockTimeout` after the timeout
    pub async fn acquire(&self) -> SheetResult<WriteGuard<'_>> {
        match tokio::time::timeout(self.timeout, self.inner.lock()).await {
            Ok(guard) => Ok(WriteGuard { _guard: guard }),
            Err(_) => Err(SheetError::LockTimeout(self.timeout)),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.inner.try_lock().is_err()
    }
}
