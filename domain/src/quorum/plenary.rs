//! Plenary vote rule and quorum gate

use super::alignment::AlignmentMode;
use super::rule::MajorityRule;
use crate::core::error::DomainError;
use crate::proposal::ProposalKind;
use serde::{Deserialize, Serialize};

/// Ballot counts of one plenary session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlenaryTally {
    pub favorable: usize,
    pub present: usize,
}

impl PlenaryTally {
    pub fn new(favorable: usize, present: usize) -> Result<Self, DomainError> {
        if favorable > present {
            return Err(DomainError::invalid_argument(format!(
                "{favorable} favorable votes exceed {present} members present"
            )));
        }
        Ok(Self { favorable, present })
    }

    /// Whether the favorable votes reach the kind's majority, before
    /// alignment is taken into account
    pub fn raw_majority(&self, kind: ProposalKind) -> bool {
        MajorityRule::for_plenary(kind).is_satisfied(self.favorable, self.present)
    }

    /// Decide the vote: raw majority XOR opposition
    pub fn passes(&self, kind: ProposalKind, mode: AlignmentMode) -> bool {
        self.raw_majority(kind) != mode.inverts()
    }
}

/// Minimum presence for a plenary vote to be tallied
///
/// Absolute majority of the house, the same for every kind of proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuorumGate {
    house_size: usize,
}

impl QuorumGate {
    pub fn new(house_size: usize) -> Self {
        Self { house_size }
    }

    pub fn house_size(&self) -> usize {
        self.house_size
    }

    pub fn minimum(&self) -> usize {
        MajorityRule::SimpleMajority.min_approvals_needed(self.house_size)
    }

    pub fn admits(&self, present: usize) -> bool {
        present >= self.minimum()
    }

    /// Reject a presence count larger than the house itself
    pub fn check_presence(&self, present: usize) -> Result<(), DomainError> {
        if present > self.house_size {
            return Err(DomainError::invalid_argument(format!(
                "{present} members present but the house has {}",
                self.house_size
            )));
        }
        Ok(())
    }
}
