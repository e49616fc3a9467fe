//! Task metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one sink task instance
#[derive(Debug, Default)]
pub struct TaskMetrics {
    /// Publishes submitted to the transport
    submitted: AtomicU64,
    /// Publishes confirmed successful
    succeeded: AtomicU64,
    /// Failed records (publish rejections and routing failures)
    failed: AtomicU64,
    /// Records skipped because no transport was available
    skipped: AtomicU64,
    /// Submitted publishes whose outcome has not arrived yet
    in_flight: AtomicU64,
}

impl TaskMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get submitted publish count
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    /// Increment submitted count and the in-flight gauge
    pub fn inc_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
        self.in_flight.fetch_add(1, Ordering::Relaxed);
    }

    /// Get successful publish count
    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    /// Increment succeeded count
    pub fn inc_succeeded(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    /// Get failed record count
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Increment failed count
    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get skipped record count
    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Increment skipped count
    pub fn inc_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Get count of publishes still awaiting an outcome
    ///
    /// Acquire pairs with the release decrement: once this reads zero, every
    /// outcome count and error-log append from completed publishes is
    /// visible to the caller.
    pub fn in_flight(&self) -> u64 {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Decrement the in-flight gauge once an outcome arrived
    pub fn dec_in_flight(&self) {
        self.in_flight.fetch_sub(1, Ordering::Release);
    }

    /// Total outcomes observed so far (successes plus failures)
    pub fn completed(&self) -> u64 {
        self.succeeded() + self.failed()
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submitted: self.submitted(),
            succeeded: self.succeeded(),
            failed: self.failed(),
            skipped: self.skipped(),
            in_flight: self.in_flight(),
        }
    }
}

/// Snapshot of task metrics (for reporting)
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub submitted: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub skipped: u64,
    pub in_flight: u64,
}
