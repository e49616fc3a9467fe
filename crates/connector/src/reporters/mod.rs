//! Errant-record reporter implementations

mod jsonl;
mod log;

pub use jsonl::JsonlFileReporter;
pub use log::LogReporter;
