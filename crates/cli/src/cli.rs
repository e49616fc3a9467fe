//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pub/Sub Sink - forwards upstream log records to a pub/sub messaging service
#[derive(Parser, Debug)]
#[command(
    name = "pubsub-sink",
    author,
    version,
    about = "Pub/sub sink connector task",
    long_about = "A sink connector task that consumes batches of records from an \n\
                  upstream log and publishes each one to a remote pub/sub messaging \n\
                  service through a pluggable record-to-channel router."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "PUBSUB_SINK_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "PUBSUB_SINK_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed records from a file through the connector task
    Run(RunArgs),

    /// Validate a configuration file without running
    Validate(ValidateArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to configuration file (TOML or JSON flat properties table)
    #[arg(
        short,
        long,
        default_value = "connector.toml",
        env = "PUBSUB_SINK_CONFIG"
    )]
    pub config: PathBuf,

    /// Path to records file, one JSON record per line
    #[arg(short, long, env = "PUBSUB_SINK_RECORDS")]
    pub records: PathBuf,

    /// Records per `put` batch
    #[arg(long, default_value = "100", env = "PUBSUB_SINK_BATCH_SIZE")]
    pub batch_size: usize,

    /// Dead-letter file for failed records (JSONL); omitted = failures only logged
    #[arg(long, env = "PUBSUB_SINK_DEAD_LETTER")]
    pub dead_letter: Option<PathBuf>,

    /// Seconds to wait for in-flight publishes before printing the summary
    #[arg(long, default_value = "10", env = "PUBSUB_SINK_DRAIN_TIMEOUT")]
    pub drain_timeout: u64,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "connector.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}
