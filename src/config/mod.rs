use crate::utils::{convert_to_bytes, SizeUnit};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A size limit, either as raw bytes or with a unit (`{"size": 10, "unit": "MB"}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeLimit {
    Bytes(u64),
    WithUnit { size: u64, unit: SizeUnit },
}

impl SizeLimit {
    pub fn bytes(self) -> u64 {
        match self {
            SizeLimit::Bytes(bytes) => bytes,
            SizeLimit::WithUnit { size, unit } => convert_to_bytes(size, unit),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Upload list configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    /// Maximum number of entries (remote + local + candidates). None = unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_count: Option<usize>,
    /// Maximum size of a single dropped file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_bytes: Option<SizeLimit>,
    /// Maximum combined size of every current and candidate entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_aggregate_size_bytes: Option<SizeLimit>,
    #[serde(default = "default_true")]
    pub allow_drag_reorder: bool,
    #[serde(default = "default_true")]
    pub allow_multiple: bool,
    /// Accepted types: mimetypes (`image/png`), wildcards (`image/*`) or
    /// extensions (`.pdf`). Empty accepts everything.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accept: Vec<String>,
}

impl UploadConfig {
    pub fn max_file_size(&self) -> Option<u64> {
        self.max_file_size_bytes.map(SizeLimit::bytes)
    }

    pub fn max_aggregate_size(&self) -> Option<u64> {
        self.max_aggregate_size_bytes.map(SizeLimit::bytes)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_count: None,
            max_file_size_bytes: None,
            max_aggregate_size_bytes: None,
            allow_drag_reorder: true,
            allow_multiple: true,
            accept: Vec::new(),
        }
    }
}

/// Read the configuration file
pub async fn read_config(config_path: &Path) -> Result<Option<UploadConfig>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(config_path).await?;
    let config: UploadConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Write the configuration file
pub async fn write_config(config_path: &Path, config: &UploadConfig) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content).await?;
    Ok(())
}
