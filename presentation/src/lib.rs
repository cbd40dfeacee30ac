//! Presentation layer for e-camara
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive and scripted session front ends.

pub mod cli;
pub mod config;
pub mod output;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::formatter_for;
pub use output::json::JsonFormatter;
pub use session::{Reply, ScriptSummary, SessionCommand, SessionRepl, SessionRunner, run_script};
