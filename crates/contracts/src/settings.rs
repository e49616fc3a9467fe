//! Connector settings - validated configuration consumed at task start

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sensitive string value, redacted in all log output.
///
/// `Debug` and `Display` never reveal the wrapped value; call
/// [`Secret::expose`] at the single point where the raw value is needed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the wrapped value
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Validated connector configuration.
///
/// Built by `config_loader` from the flat properties map the host hands to
/// task start. `params` carries unrecognized keys through to the transport
/// implementation untouched.
#[derive(Debug, Clone)]
pub struct ConnectorSettings {
    /// Client identity presented to the messaging service
    pub user_id: String,
    /// Publish key
    pub publish_key: String,
    /// Subscribe key
    pub subscribe_key: String,
    /// Secret key, never logged
    pub secret_key: Secret,
    /// Optional named router override; `None` selects the default router
    pub router: Option<String>,
    /// Capacity of the recent-errors ring kept by the task
    pub error_log_capacity: usize,
    /// Unrecognized keys, passed through to the transport
    pub params: HashMap<String, String>,
}
