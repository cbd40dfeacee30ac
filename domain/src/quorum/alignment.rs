//! Voting alignment mode

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How the governing coalition orients a vote
///
/// Selects which majority rule applies. `Opposition` inverts the outcome:
/// an opposition-flagged vote passes exactly when the government does not
/// carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum AlignmentMode {
    /// Members vote by their own interests
    Free,
    /// Members follow the government
    GovernmentAligned,
    /// The government opposes the proposal
    Opposition,
}

impl AlignmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentMode::Free => "FREE",
            AlignmentMode::GovernmentAligned => "GOVERNMENT-ALIGNED",
            AlignmentMode::Opposition => "OPPOSITION",
        }
    }

    /// Whether this mode negates the raw majority outcome
    pub fn inverts(&self) -> bool {
        matches!(self, AlignmentMode::Opposition)
    }
}

impl std::fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AlignmentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('_', "-").as_str() {
            "FREE" | "LIVRE" => Ok(AlignmentMode::Free),
            "GOVERNMENT" | "GOVERNMENT-ALIGNED" | "GOVERNISTA" => {
                Ok(AlignmentMode::GovernmentAligned)
            }
            "OPPOSITION" | "OPOSICAO" => Ok(AlignmentMode::Opposition),
            _ => Err(DomainError::invalid_argument(format!(
                "unknown alignment mode: {s}. Valid: FREE, GOVERNMENT-ALIGNED, OPPOSITION"
            ))),
        }
    }
}
