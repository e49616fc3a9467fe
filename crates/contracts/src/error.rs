//! Layered error definitions
//!
//! Categorized by source: config / router / transport

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ConnectorError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Router Errors =====
    /// No router registered under the configured name
    #[error("router not found: '{name}'")]
    RouterNotFound { name: String },

    /// Router invocation error for a single record
    #[error("routing failed for record {topic}/{offset}: {message}")]
    Route {
        topic: String,
        offset: i64,
        message: String,
    },

    // ===== Transport Errors =====
    /// Transport connection error
    #[error("transport connect error: {message}")]
    Connect { message: String },

    /// Publish error for a single message
    #[error("publish to channel '{channel}' failed: {message}")]
    Publish { channel: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ConnectorError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create router invocation error
    pub fn route(topic: impl Into<String>, offset: i64, message: impl Into<String>) -> Self {
        Self::Route {
            topic: topic.into(),
            offset,
            message: message.into(),
        }
    }

    /// Create transport connection error
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Create publish error
    pub fn publish(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Publish {
            channel: channel.into(),
            message: message.into(),
        }
    }
}
