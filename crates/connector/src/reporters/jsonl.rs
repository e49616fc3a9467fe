//! JsonlFileReporter - appends failed records to a dead-letter file

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use contracts::{ConnectorError, ErrantRecordReporter, SinkRecord};
use serde_json::json;
use tracing::error;

/// Reporter that appends one JSON line per failed record to a file.
///
/// Each line carries the original record and the failure cause, enough to
/// replay or inspect the record later. Reporting is best-effort: write
/// failures are logged and the line is dropped, per the reporter contract.
pub struct JsonlFileReporter {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlFileReporter {
    /// Open (or create) the dead-letter file in append mode
    ///
    /// # Errors
    /// Returns the underlying IO error when the file cannot be opened
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ConnectorError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Dead-letter file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrantRecordReporter for JsonlFileReporter {
    fn report(&self, record: &SinkRecord, cause: &ConnectorError) {
        let line = json!({
            "record": record,
            "cause": cause.to_string(),
        });

        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        // flush per line: a dead-letter entry must survive an abrupt stop
        let written = writeln!(file, "{line}").and_then(|()| file.flush());
        if let Err(e) = written {
            error!(
                path = %self.path.display(),
                topic = %record.topic,
                offset = record.offset,
                error = %e,
                "failed to write dead-letter entry"
            );
        }
    }
}
