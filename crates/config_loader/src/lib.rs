//! # Config Loader
//!
//! Configuration loading and validation module.
//!
//! Responsibilities:
//! - Build validated [`ConnectorSettings`] from the flat properties map the
//!   host passes to task start
//! - Load that map from TOML/JSON files for the CLI
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let settings = ConfigLoader::load_from_path(Path::new("connector.toml")).unwrap();
//! println!("User: {}", settings.user_id);
//! ```

mod parser;
mod properties;

pub use contracts::ConnectorSettings;
pub use parser::ConfigFormat;
pub use properties::{keys, DEFAULT_ERROR_LOG_CAPACITY};

use std::collections::HashMap;
use std::path::Path;

use contracts::ConnectorError;

/// Configuration loader
///
/// Provides static methods to build settings from property maps, files, or
/// strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build validated settings from a flat properties map
    ///
    /// This is the entry point used at task start.
    ///
    /// # Errors
    /// - Missing or empty required key
    /// - Malformed optional key
    pub fn from_properties(
        properties: &HashMap<String, String>,
    ) -> Result<ConnectorSettings, ConnectorError> {
        properties::build(properties)
    }

    /// Load settings from a file path
    ///
    /// Automatically detects format from the file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<ConnectorSettings, ConnectorError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load the raw properties map from a file path, without validation
    ///
    /// Used by hosts that hand the flat map to the task's `start`, which
    /// validates it.
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    pub fn load_properties(path: &Path) -> Result<HashMap<String, String>, ConnectorError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        parser::parse(&content, format)
    }

    /// Load settings from a string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<ConnectorSettings, ConnectorError> {
        let map = parser::parse(content, format)?;
        properties::build(&map)
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ConnectorError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ConnectorError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ConnectorError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ConnectorError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
