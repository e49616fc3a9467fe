//! `run` command implementation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, warn};

use config_loader::ConfigLoader;
use connector::reporters::JsonlFileReporter;
use connector::SinkTask;
use contracts::{ErrantRecordReporter, SinkRecord};
use transport::InMemoryTransport;

use crate::cli::RunArgs;

/// Execute the `run` command
///
/// Drives one connector task over the in-memory transport: start, feed the
/// records file in batches, wait for the outcomes to drain, print a summary,
/// stop.
pub async fn run_connector(args: &RunArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let properties = ConfigLoader::load_properties(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let records = read_records(&args.records)
        .with_context(|| format!("Failed to read records from {}", args.records.display()))?;
    info!(records = records.len(), "Records loaded");

    let mut task: SinkTask<InMemoryTransport> = SinkTask::new();

    let reporter: Option<Arc<dyn ErrantRecordReporter>> = match &args.dead_letter {
        Some(path) => {
            info!(path = %path.display(), "Dead-letter file configured");
            Some(Arc::new(JsonlFileReporter::create(path)?))
        }
        None => None,
    };
    task.initialize(reporter);

    task.start(&properties)
        .await
        .context("Connector task failed to start")?;

    let started = Instant::now();
    for batch in records.chunks(args.batch_size.max(1)) {
        task.put(batch.to_vec());
    }

    drain(&task, Duration::from_secs(args.drain_timeout)).await;

    print_summary(&task, started.elapsed());

    task.stop().await;
    info!("pubsub-sink finished");
    Ok(())
}

/// Read one JSON record per line, skipping blank lines
fn read_records(path: &Path) -> Result<Vec<SinkRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: SinkRecord = serde_json::from_str(&line)
            .with_context(|| format!("invalid record at line {}", line_no + 1))?;
        records.push(record);
    }

    Ok(records)
}

/// Wait until every submitted publish has an observed outcome
async fn drain(task: &SinkTask<InMemoryTransport>, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while task.metrics().in_flight() > 0 {
        if Instant::now() >= deadline {
            warn!(
                in_flight = task.metrics().in_flight(),
                "Drain timeout reached, some outcomes are still pending"
            );
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
}

fn print_summary(task: &SinkTask<InMemoryTransport>, elapsed: Duration) {
    let snapshot = task.metrics().snapshot();

    println!("\n=== Run Summary ===\n");
    println!("  Submitted: {}", snapshot.submitted);
    println!("  Succeeded: {}", snapshot.succeeded);
    println!("  Failed:    {}", snapshot.failed);
    println!("  Skipped:   {}", snapshot.skipped);
    println!("  Elapsed:   {:.2}s", elapsed.as_secs_f64());

    if let Some(transport) = task.transport() {
        let mut channels = transport.channels();
        channels.sort();
        if !channels.is_empty() {
            println!("\nChannels ({}):", channels.len());
            for channel in channels {
                println!("  - {} ({} messages)", channel, transport.published(&channel).len());
            }
        }
    }

    let causes = task.errors().causes();
    if !causes.is_empty() {
        println!("\nRecent failures ({} of {} total):", causes.len(), task.errors().total());
        for cause in causes {
            println!("  - {cause}");
        }
    }

    println!();
}
