//! # Contracts
//!
//! Frozen interface contracts, defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Delivery Model
//! - Records enter in host-driven batches; publishes complete asynchronously
//! - Completion order is unrelated to submission order

mod error;
mod record;
mod reporter;
mod router;
mod settings;
mod transport;

pub use error::*;
pub use record::*;
pub use reporter::ErrantRecordReporter;
pub use router::Router;
pub use settings::{ConnectorSettings, Secret};
pub use transport::Transport;
