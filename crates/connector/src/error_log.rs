//! Bounded in-process log of publish failure causes
//!
//! The task keeps every failure cause it has seen for introspection by the
//! host and by tests. The recent window is bounded (oldest entries evicted)
//! so a long-running task cannot grow without limit; a lifetime counter keeps
//! the true total.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use config_loader::DEFAULT_ERROR_LOG_CAPACITY;
use contracts::ConnectorError;

/// Append-only failure log, safe for concurrent append from publish
/// completions.
#[derive(Debug)]
pub struct ErrorLog {
    capacity: usize,
    recent: Mutex<VecDeque<ConnectorError>>,
    total: AtomicU64,
}

impl ErrorLog {
    /// Create a log with the default recent-window capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ERROR_LOG_CAPACITY)
    }

    /// Create a log keeping at most `capacity` recent causes
    ///
    /// Storage grows with actual failures, never with the configured bound,
    /// so an arbitrarily large capacity is safe to configure.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            recent: Mutex::new(VecDeque::new()),
            total: AtomicU64::new(0),
        }
    }

    /// Append one failure cause
    ///
    /// Insertion order reflects completion order, not submission order.
    pub fn push(&self, cause: ConnectorError) {
        self.total.fetch_add(1, Ordering::Relaxed);
        let mut recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(cause);
    }

    /// Number of causes currently retained
    pub fn len(&self) -> usize {
        self.recent.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lifetime count of causes, including evicted ones
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Snapshot of the retained causes as display strings
    pub fn causes(&self) -> Vec<String> {
        self.recent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|cause| cause.to_string())
            .collect()
    }

    /// Take every retained cause, leaving the recent window empty
    ///
    /// The lifetime total is unaffected.
    pub fn drain(&self) -> Vec<ConnectorError> {
        self.recent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new()
    }
}
