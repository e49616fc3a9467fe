//! Inbound record and routed message types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of data consumed from the upstream log.
///
/// Immutable once received. `topic` and `offset` identify the record for
/// logging and errant-record reporting; `value` is the payload handed to the
/// router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinkRecord {
    /// Source topic the record was consumed from
    pub topic: String,
    /// Source partition
    #[serde(default)]
    pub partition: i32,
    /// Position within the source partition
    pub offset: i64,
    /// Optional record key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Record payload
    pub value: Value,
    /// Source timestamp in epoch milliseconds, if the upstream provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl SinkRecord {
    /// Create a record with only the identifying fields set
    pub fn new(topic: impl Into<String>, offset: i64, value: Value) -> Self {
        Self {
            topic: topic.into(),
            partition: 0,
            offset,
            key: None,
            value,
            timestamp: None,
        }
    }

    /// Builder-style key setter
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Destination channel and payload produced by a router for exactly one record.
///
/// No identity beyond its two fields; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAndMessage {
    /// Destination channel on the remote messaging service
    pub channel: String,
    /// Message payload to publish
    pub message: Value,
}

impl ChannelAndMessage {
    pub fn new(channel: impl Into<String>, message: Value) -> Self {
        Self {
            channel: channel.into(),
            message,
        }
    }
}
