//! # Connector
//!
//! Sink connector task core: routing, asynchronous publish dispatch, and
//! failure reporting.
//!
//! Data flow: batch of records → [`SinkTask::put`] iterates → router produces
//! channel and message → non-blocking publish on the transport → outcome
//! observed asynchronously → success logged / failure reported and
//! accumulated. Control returns to the host as soon as the batch is
//! submitted.

mod error_log;
mod metrics;
mod outcome;
mod registry;
pub mod reporters;
pub mod routers;
mod task;

pub use error_log::ErrorLog;
pub use metrics::{MetricsSnapshot, TaskMetrics};
pub use registry::{RouterFactory, RouterRegistry, DEFAULT_ROUTER};
pub use task::SinkTask;

/// Connector build version (static metadata)
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_is_nonempty() {
        assert!(!super::version().is_empty());
    }
}
