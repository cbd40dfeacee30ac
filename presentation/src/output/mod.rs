//! Output formatting
//!
//! [`ConsoleFormatter`](console::ConsoleFormatter) renders text with the
//! chamber's Portuguese labels; [`JsonFormatter`](json::JsonFormatter)
//! renders one JSON document per command.

pub mod console;
pub mod formatter;
pub mod json;

use camara_domain::OutputFormat;
use formatter::OutputFormatter;

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
