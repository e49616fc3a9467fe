//! Transport abstraction - handle to the remote messaging service
//!
//! Defines the trait for publishing to the remote pub/sub service, supporting
//! real implementations and mock testing.

use std::future::Future;

use serde_json::Value;

use crate::{ConnectorError, ConnectorSettings};

/// Remote messaging service connection trait
///
/// The transport is the black-box collaborator that accepts
/// `publish(channel, message)` and eventually resolves each call to success
/// or error. One connection is created per task at start, shared by all
/// publish submissions, and destroyed at stop.
pub trait Transport: Send + Sync + 'static {
    /// Establish the connection described by `settings`
    ///
    /// Attempted exactly once per task start; construction is not retried.
    ///
    /// # Errors
    /// Returns a connect error when the service is unreachable or rejects
    /// the credentials
    fn connect(
        settings: &ConnectorSettings,
    ) -> impl Future<Output = Result<Self, ConnectorError>> + Send
    where
        Self: Sized;

    /// Publish one message to a channel
    ///
    /// The returned future resolves once the remote service has accepted or
    /// rejected the message; completion order is unrelated to call order.
    ///
    /// # Errors
    /// Returns a publish error scoped to this single message
    fn publish(
        &self,
        channel: &str,
        message: &Value,
    ) -> impl Future<Output = Result<(), ConnectorError>> + Send;

    /// Release the connection
    ///
    /// Idempotent: destroying an already-destroyed connection is a no-op.
    /// A destroyed connection rejects any further `publish` call.
    fn destroy(&self) -> impl Future<Output = ()> + Send;
}
