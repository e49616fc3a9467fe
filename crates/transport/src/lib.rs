//! # Transport
//!
//! [`Transport`](contracts::Transport) implementations.
//!
//! Currently ships the in-memory transport used for tests, dry runs, and the
//! CLI demo pipeline. Failure scenarios are injected through pass-through
//! `mock.*` configuration params, so the same task code path is exercised for
//! success and failure without a live messaging service.

mod in_memory;

pub use in_memory::InMemoryTransport;
