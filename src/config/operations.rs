//! Config loading and serialization operations.

use super::format::DocumentFormat;
use super::model::{LoadedConfig, StyleConfig};
use super::parse::parse_document;
use crate::error::{Result, StyleError};
use std::path::Path;

impl StyleConfig {
    /// Load and validate a document from a file.
    ///
    /// The format is chosen from the file extension (`.json` is JSON,
    /// anything else YAML).
    ///
    /// # Returns
    ///
    /// * `Ok(LoadedConfig)` - Validated document plus any warnings
    /// * `Err(StyleError::UserError)` - File could not be read
    /// * `Err(StyleError::SchemaError)` - Missing key or wrong value type
    /// * `Err(StyleError::ValidationError)` - Malformed glob, color or shade
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedConfig> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StyleError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let format = DocumentFormat::from_path(path);
        tracing::debug!(path = %path.display(), ?format, "loading styling document");

        let mut loaded = Self::parse(&content, format)?;
        loaded.source = Some(path.to_path_buf());
        Ok(loaded)
    }

    /// Parse and validate a document in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<LoadedConfig> {
        match format {
            DocumentFormat::Yaml => Self::from_yaml(text),
            DocumentFormat::Json => Self::from_json(text),
        }
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<LoadedConfig> {
        let root: serde_yaml::Value = serde_yaml::from_str(yaml)
            .map_err(|e| StyleError::SchemaError(format!("failed to parse YAML: {}", e)))?;
        parse_document(root)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<LoadedConfig> {
        let root: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| StyleError::SchemaError(format!("failed to parse JSON: {}", e)))?;
        let root = serde_yaml::to_value(root)
            .map_err(|e| StyleError::SchemaError(format!("failed to read JSON document: {}", e)))?;
        parse_document(root)
    }

    /// Serialize the document in the given format.
    pub fn render(&self, format: DocumentFormat) -> Result<String> {
        match format {
            DocumentFormat::Yaml => self.to_yaml(),
            DocumentFormat::Json => self.to_json(),
        }
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| StyleError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Serialize to a pretty-printed JSON string with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)
            .map_err(|e| StyleError::UserError(format!("failed to serialize config to JSON: {}", e)))?;
        out.push('\n');
        Ok(out)
    }
}
