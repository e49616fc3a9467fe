//! ErrantRecordReporter trait - dead-letter destination for failed records

use crate::{ConnectorError, SinkRecord};

/// Optional collaborator that receives records whose publish failed.
///
/// Supplied by the host at task initialization when a dead-letter destination
/// is configured; absence is legal and means failures are only logged and
/// accumulated.
///
/// Invoked concurrently from multiple publish completions. Implementations
/// must be safe for concurrent use and must handle their own errors
/// internally; `report` is best-effort and must not panic.
pub trait ErrantRecordReporter: Send + Sync {
    /// Forward one failed record together with its failure cause
    fn report(&self, record: &SinkRecord, cause: &ConnectorError);
}
