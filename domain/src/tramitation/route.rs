//! Destination requested after a committee vote

use crate::core::error::DomainError;
use crate::proposal::{CommitteeName, Proposal};

/// Where a proposal goes if the committee approves it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextLocation {
    /// Another committee
    Committee(CommitteeName),
    /// The plenary floor, first round
    Plenary,
    /// Close in committee (`-`); only conclusive bills may do this
    Closing,
}

impl NextLocation {
    /// Reject destinations the proposal cannot take
    pub fn validate_for(&self, proposal: &Proposal) -> Result<(), DomainError> {
        if *self == NextLocation::Closing && !proposal.is_conclusive() {
            return Err(DomainError::invalid_argument(format!(
                "{} is not conclusive and must go to plenary",
                proposal.code()
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for NextLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NextLocation::Committee(name) => write!(f, "{name}"),
            NextLocation::Plenary => write!(f, "plenario"),
            NextLocation::Closing => write!(f, "-"),
        }
    }
}

impl std::str::FromStr for NextLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" => Err(DomainError::invalid_argument("next location cannot be empty")),
            "-" => Ok(NextLocation::Closing),
            "plenario" | "plenary" => Ok(NextLocation::Plenary),
            _ => Ok(NextLocation::Committee(CommitteeName::new(s)?)),
        }
    }
}
