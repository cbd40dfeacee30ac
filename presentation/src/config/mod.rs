//! Presentation-level configuration
//!
//! Output settings resolved from the config file and command-line flags.

use crate::cli::commands::Cli;
use camara_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Resolve from file settings; CLI flags win
    pub fn resolve(cli: &Cli, file_format: Option<OutputFormat>, file_color: bool) -> Self {
        Self {
            format: cli
                .output
                .map(OutputFormat::from)
                .or(file_format)
                .unwrap_or_default(),
            color: file_color && !cli.no_color,
        }
    }

    /// Apply the color setting to the terminal output
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
