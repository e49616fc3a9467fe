//! SinkTask - lifecycle and batch dispatch
//!
//! Owns the transport connection for its lifetime and exposes the
//! batch-processing entry point to the host. One task instance is driven by
//! one host thread; publish completions arrive concurrently on the runtime's
//! workers.

use std::collections::HashMap;
use std::sync::Arc;

use config_loader::ConfigLoader;
use contracts::{ConnectorError, ErrantRecordReporter, Router, SinkRecord, Transport};
use tracing::{debug, info, instrument};

use crate::error_log::ErrorLog;
use crate::metrics::TaskMetrics;
use crate::outcome::{self, OutcomeContext};
use crate::registry::RouterRegistry;
use crate::routers::TopicRouter;

/// Sink connector task
///
/// Lifecycle: `new` → [`initialize`](Self::initialize) →
/// [`start`](Self::start) → any number of [`put`](Self::put) calls →
/// [`stop`](Self::stop). A stopped task is never restarted.
pub struct SinkTask<T: Transport> {
    transport: Option<Arc<T>>,
    router: Arc<dyn Router>,
    reporter: Option<Arc<dyn ErrantRecordReporter>>,
    registry: RouterRegistry,
    errors: Arc<ErrorLog>,
    metrics: Arc<TaskMetrics>,
}

impl<T: Transport> SinkTask<T> {
    /// Create a task in the Created state
    pub fn new() -> Self {
        Self {
            transport: None,
            router: Arc::new(TopicRouter),
            reporter: None,
            registry: RouterRegistry::builtin(),
            errors: Arc::new(ErrorLog::new()),
            metrics: Arc::new(TaskMetrics::new()),
        }
    }

    /// Create a task from pre-built parts, bypassing `start` (for testing)
    pub fn with_parts(transport: Option<Arc<T>>, router: Arc<dyn Router>) -> Self {
        Self {
            transport,
            router,
            reporter: None,
            registry: RouterRegistry::builtin(),
            errors: Arc::new(ErrorLog::new()),
            metrics: Arc::new(TaskMetrics::new()),
        }
    }

    /// Accept the host context
    ///
    /// The reporter is the optional dead-letter collaborator; `None` means
    /// failures are only logged and accumulated.
    pub fn initialize(&mut self, reporter: Option<Arc<dyn ErrantRecordReporter>>) {
        self.reporter = reporter;
    }

    /// Router registry, for hosts registering custom routers before `start`
    pub fn registry_mut(&mut self) -> &mut RouterRegistry {
        &mut self.registry
    }

    /// Start the task: validate configuration, select the router, establish
    /// the transport connection
    ///
    /// Connection construction is attempted exactly once; any failure here is
    /// fatal and leaves the task without a transport, so subsequent `put`
    /// calls are no-ops.
    ///
    /// # Errors
    /// - Missing/invalid required configuration key
    /// - Unknown router name
    /// - Transport connection failure
    #[instrument(name = "sink_task_start", skip(self, properties))]
    pub async fn start(
        &mut self,
        properties: &HashMap<String, String>,
    ) -> Result<(), ConnectorError> {
        let settings = ConfigLoader::from_properties(properties)?;
        let router = self.registry.resolve(settings.router.as_deref())?;
        let transport = T::connect(&settings).await?;

        self.router = router;
        self.errors = Arc::new(ErrorLog::with_capacity(settings.error_log_capacity));
        self.transport = Some(Arc::new(transport));

        info!(
            user_id = %settings.user_id,
            router = %self.router.name(),
            "sink connector task started"
        );
        Ok(())
    }

    /// Process one batch of records
    ///
    /// For each record the router produces a channel and message, and a
    /// non-blocking publish is submitted to the transport; the outcome is
    /// observed asynchronously. Returns once every record in the batch has
    /// been submitted, without waiting for any outcome.
    ///
    /// Records arriving while no transport exists (start not yet run, start
    /// failed, or task stopped) are skipped without error. A router failure
    /// skips only that record, following the same reporting path as a failed
    /// publish.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(name = "sink_task_put", skip(self, records))]
    pub fn put(&self, records: impl IntoIterator<Item = SinkRecord>) {
        let Some(transport) = self.transport.as_ref() else {
            for record in records {
                self.metrics.inc_skipped();
                debug!(
                    topic = %record.topic,
                    offset = record.offset,
                    "no transport connection, record skipped"
                );
            }
            return;
        };

        for record in records {
            self.submit(record, transport);
        }
    }

    fn submit(&self, record: SinkRecord, transport: &Arc<T>) {
        let ctx = self.context();

        let routed = match self.router.route(&record) {
            Ok(routed) => routed,
            Err(cause) => {
                outcome::fail(&record, cause, &ctx);
                return;
            }
        };

        self.metrics.inc_submitted();
        let transport = Arc::clone(transport);
        tokio::spawn(async move {
            let result = transport.publish(&routed.channel, &routed.message).await;
            outcome::complete(&record, result, &ctx);
        });
    }

    /// Stop the task and release the transport connection
    ///
    /// Idempotent: safe to call repeatedly, and safe when `start` never
    /// completed successfully. In-flight publishes are not awaited; their
    /// outcomes are still observed by the completion tasks.
    #[instrument(name = "sink_task_stop", skip(self))]
    pub async fn stop(&mut self) {
        info!("stopping sink connector task");
        if let Some(transport) = self.transport.take() {
            transport.destroy().await;
        }
    }

    /// Current transport connection, if the task is started
    pub fn transport(&self) -> Option<&Arc<T>> {
        self.transport.as_ref()
    }

    /// Active router
    pub fn router(&self) -> &Arc<dyn Router> {
        &self.router
    }

    /// Task counters
    pub fn metrics(&self) -> &Arc<TaskMetrics> {
        &self.metrics
    }

    /// Accumulated failure causes
    pub fn errors(&self) -> &Arc<ErrorLog> {
        &self.errors
    }

    fn context(&self) -> OutcomeContext {
        OutcomeContext {
            reporter: self.reporter.clone(),
            errors: Arc::clone(&self.errors),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<T: Transport> Default for SinkTask<T> {
    fn default() -> Self {
        Self::new()
    }
}
