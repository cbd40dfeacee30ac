//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for engine results
///
/// This is a domain concept representing how trails and outcomes are
/// rendered for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output
    Json,
}
