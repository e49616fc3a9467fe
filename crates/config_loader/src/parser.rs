//! Properties parsing
//!
//! The connector consumes a flat string-to-string properties map. For the CLI
//! that map can be loaded from a TOML (primary) or JSON file holding a single
//! flat table.

use std::collections::HashMap;

use contracts::ConnectorError;

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Infer format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a TOML flat table into a properties map
pub fn parse_toml(content: &str) -> Result<HashMap<String, String>, ConnectorError> {
    toml::from_str(content).map_err(|e| ConnectorError::ConfigParse {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse a JSON flat object into a properties map
pub fn parse_json(content: &str) -> Result<HashMap<String, String>, ConnectorError> {
    serde_json::from_str(content).map_err(|e| ConnectorError::ConfigParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse properties according to `format`
pub fn parse(content: &str, format: ConfigFormat) -> Result<HashMap<String, String>, ConnectorError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}
