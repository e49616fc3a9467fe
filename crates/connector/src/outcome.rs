//! Publish outcome handling
//!
//! Every submitted publish resolves here exactly once, on whatever runtime
//! worker the completion lands on. Failures are logged, forwarded to the
//! errant-record reporter when one is configured, and appended to the task's
//! error log; nothing here aborts the batch or the task.

use std::sync::Arc;

use contracts::{ConnectorError, ErrantRecordReporter, SinkRecord};
use tracing::{error, info};

use crate::error_log::ErrorLog;
use crate::metrics::TaskMetrics;

/// Shared state each publish completion needs, cloned into the publish task.
#[derive(Clone)]
pub(crate) struct OutcomeContext {
    pub reporter: Option<Arc<dyn ErrantRecordReporter>>,
    pub errors: Arc<ErrorLog>,
    pub metrics: Arc<TaskMetrics>,
}

/// Observe the outcome of one submitted publish
pub(crate) fn complete(
    record: &SinkRecord,
    result: Result<(), ConnectorError>,
    ctx: &OutcomeContext,
) {
    match result {
        Ok(()) => {
            ctx.metrics.inc_succeeded();
            info!(
                topic = %record.topic,
                partition = record.partition,
                offset = record.offset,
                value = %record.value,
                "record published"
            );
        }
        Err(cause) => fail(record, cause, ctx),
    }
    ctx.metrics.dec_in_flight();
}

/// Record one failed record: log, report, accumulate
///
/// Used for publish rejections and for router invocation failures alike, so a
/// router error for one record follows the same path as a failed publish.
pub(crate) fn fail(record: &SinkRecord, cause: ConnectorError, ctx: &OutcomeContext) {
    error!(
        topic = %record.topic,
        partition = record.partition,
        offset = record.offset,
        value = %record.value,
        cause = %cause,
        "record failed"
    );
    if let Some(reporter) = &ctx.reporter {
        reporter.report(record, &cause);
    }
    ctx.errors.push(cause);
    ctx.metrics.inc_failed();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct CountingReporter {
        calls: AtomicU64,
    }

    impl ErrantRecordReporter for CountingReporter {
        fn report(&self, _record: &SinkRecord, _cause: &ConnectorError) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn context(reporter: Option<Arc<dyn ErrantRecordReporter>>) -> OutcomeContext {
        OutcomeContext {
            reporter,
            errors: Arc::new(ErrorLog::new()),
            metrics: Arc::new(TaskMetrics::new()),
        }
    }

    #[test]
    fn test_success_only_counts() {
        let ctx = context(None);
        ctx.metrics.inc_submitted();
        complete(
            &SinkRecord::new("a", 1, json!("v")),
            Ok(()),
            &ctx,
        );

        assert_eq!(ctx.metrics.succeeded(), 1);
        assert_eq!(ctx.metrics.in_flight(), 0);
        assert!(ctx.errors.is_empty());
    }

    #[test]
    fn test_failure_reports_and_accumulates() {
        let reporter = Arc::new(CountingReporter {
            calls: AtomicU64::new(0),
        });
        let ctx = context(Some(reporter.clone()));
        ctx.metrics.inc_submitted();
        complete(
            &SinkRecord::new("a", 5, json!("v")),
            Err(ConnectorError::publish("a", "network-timeout")),
            &ctx,
        );

        assert_eq!(ctx.metrics.failed(), 1);
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.errors.len(), 1);
        assert!(ctx.errors.causes()[0].contains("network-timeout"));
    }

    #[test]
    fn test_failure_without_reporter_still_accumulates() {
        let ctx = context(None);
        fail(
            &SinkRecord::new("a", 5, json!("v")),
            ConnectorError::publish("a", "boom"),
            &ctx,
        );

        assert_eq!(ctx.errors.total(), 1);
        assert_eq!(ctx.metrics.failed(), 1);
    }
}
