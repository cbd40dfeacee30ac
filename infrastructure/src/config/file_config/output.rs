//! Output and event log configuration from TOML (`[output]`, `[log]`)

use camara_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use camara_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text` or `json`; the CLI flag wins when given
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw event log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file receiving one line per tramitation event
    pub events_file: Option<PathBuf>,
}
