//! CLI command definitions

use camara_domain::OutputFormat as DomainOutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with Portuguese labels
    Text,
    /// One JSON document per command
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for e-camara
#[derive(Parser, Debug)]
#[command(name = "camara")]
#[command(author, version, about = "Bill tramitation engine for the Chamber of Deputies")]
#[command(long_about = r#"
e-camara registers bills (PL, PLP, PEC) and moves them through committee
and plenary votes.

Without a script the interactive session starts; type `help` there for the
command list. With a script, each non-empty line not starting with `#` is
run as a session command.

Configuration files are loaded from (in priority order):
1. CAMARA_* environment variables
2. --config <path>     Explicit config file
3. ./camara.toml       Project-level config
4. ~/.config/e-camara/config.toml   Global config

Example:
  camara
  camara session.txt --output json
  camara --config roster.toml -v
"#)]
pub struct Cli {
    /// Script of session commands to run instead of the interactive session
    pub script: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Stop a script at the first failing command
    #[arg(long)]
    pub fail_fast: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
