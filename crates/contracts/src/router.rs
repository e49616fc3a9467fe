//! Router trait - record to channel-and-message mapping
//!
//! Defines the pluggable strategy that decides where each record is published.

use crate::{ChannelAndMessage, ConnectorError, SinkRecord};

/// Record routing trait
///
/// Maps one inbound record to one `(channel, message)` pair. Implementations
/// must be deterministic for a given record and must not perform network I/O.
///
/// Routing is fallible: a failure for one record is handled like a publish
/// failure for that record (logged, reported, accumulated) and never aborts
/// the batch or the task.
pub trait Router: Send + Sync {
    /// Router name (used for registry lookup and logging)
    fn name(&self) -> &str;

    /// Map a record to its destination channel and payload
    ///
    /// # Errors
    /// Returns a routing error scoped to this single record
    fn route(&self, record: &SinkRecord) -> Result<ChannelAndMessage, ConnectorError>;
}
