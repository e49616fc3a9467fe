//! LogReporter - dead-letter stand-in that re-emits failures via tracing

use contracts::{ConnectorError, ErrantRecordReporter, SinkRecord};
use tracing::warn;

/// Reporter that logs each failed record at warn level.
///
/// Useful when no real dead-letter destination is configured but failures
/// should still stand out from the task's own error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrantRecordReporter for LogReporter {
    fn report(&self, record: &SinkRecord, cause: &ConnectorError) {
        warn!(
            topic = %record.topic,
            partition = record.partition,
            offset = record.offset,
            value = %record.value,
            cause = %cause,
            "errant record"
        );
    }
}
