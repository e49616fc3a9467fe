//! In-memory transport
//!
//! Stores published messages per channel and supports injected failure
//! scenarios for tests and dry runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use contracts::{ConnectorError, ConnectorSettings, Transport};
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Failure injection, parsed from pass-through `mock.*` settings params
#[derive(Debug, Default, Clone)]
struct MockBehavior {
    /// Reject the connection attempt
    fail_connect: bool,
    /// Channels whose publishes should fail
    fail_channels: Vec<String>,
    /// Fail any publish whose serialized message contains this substring
    fail_message_contains: Option<String>,
    /// Cause string attached to injected failures
    fail_cause: String,
    /// Artificial publish latency
    publish_delay: Duration,
}

impl MockBehavior {
    fn from_params(params: &HashMap<String, String>) -> Self {
        let fail_connect = params
            .get("mock.fail_connect")
            .is_some_and(|v| v.as_str() == "true");
        let fail_channels = params
            .get("mock.fail_channels")
            .map(|csv| {
                csv.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let fail_message_contains = params
            .get("mock.fail_message_contains")
            .filter(|s| !s.is_empty())
            .cloned();
        let fail_cause = params
            .get("mock.fail_cause")
            .cloned()
            .unwrap_or_else(|| "injected failure".to_string());
        let publish_delay = params
            .get("mock.publish_delay_ms")
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or_default();

        Self {
            fail_connect,
            fail_channels,
            fail_message_contains,
            fail_cause,
            publish_delay,
        }
    }
}

/// Transport that keeps published messages in process memory.
///
/// Messages are appended per channel in completion order. The connection can
/// be inspected after the fact through [`published`](Self::published) and
/// [`publish_count`](Self::publish_count).
#[derive(Debug)]
pub struct InMemoryTransport {
    behavior: MockBehavior,
    published: Mutex<HashMap<String, Vec<Value>>>,
    publish_count: AtomicU64,
    destroyed: AtomicBool,
}

impl InMemoryTransport {
    /// Messages published to `channel` so far
    pub fn published(&self, channel: &str) -> Vec<Value> {
        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(channel)
            .cloned()
            .unwrap_or_default()
    }

    /// Channels that received at least one message
    pub fn channels(&self) -> Vec<String> {
        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect()
    }

    /// Total successful publishes
    pub fn publish_count(&self) -> u64 {
        self.publish_count.load(Ordering::Relaxed)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    fn injected_failure(&self, channel: &str, message: &Value) -> Option<ConnectorError> {
        let behavior = &self.behavior;
        let by_channel = behavior.fail_channels.iter().any(|c| c == channel);
        let by_message = behavior
            .fail_message_contains
            .as_deref()
            .is_some_and(|needle| message.to_string().contains(needle));

        (by_channel || by_message)
            .then(|| ConnectorError::publish(channel, behavior.fail_cause.clone()))
    }
}

impl Transport for InMemoryTransport {
    #[instrument(name = "in_memory_connect", skip(settings), fields(user_id = %settings.user_id))]
    async fn connect(settings: &ConnectorSettings) -> Result<Self, ConnectorError> {
        let behavior = MockBehavior::from_params(&settings.params);
        if behavior.fail_connect {
            return Err(ConnectorError::connect("injected connect failure"));
        }

        info!("in-memory transport connected");
        Ok(Self {
            behavior,
            published: Mutex::new(HashMap::new()),
            publish_count: AtomicU64::new(0),
            destroyed: AtomicBool::new(false),
        })
    }

    async fn publish(&self, channel: &str, message: &Value) -> Result<(), ConnectorError> {
        if self.is_destroyed() {
            return Err(ConnectorError::publish(channel, "connection destroyed"));
        }

        if !self.behavior.publish_delay.is_zero() {
            tokio::time::sleep(self.behavior.publish_delay).await;
        }

        if let Some(cause) = self.injected_failure(channel, message) {
            return Err(cause);
        }

        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(channel.to_string())
            .or_default()
            .push(message.clone());
        self.publish_count.fetch_add(1, Ordering::Relaxed);

        debug!(channel = %channel, "message stored");
        Ok(())
    }

    #[instrument(name = "in_memory_destroy", skip(self))]
    async fn destroy(&self) {
        if !self.destroyed.swap(true, Ordering::SeqCst) {
            info!("in-memory transport destroyed");
        }
    }
}
