//! Majority rules for vote counting
//!
//! This module defines the thresholds a vote must reach to pass.

use crate::core::error::DomainError;
use crate::proposal::ProposalKind;
use serde::{Deserialize, Serialize};

/// Rule for determining whether a vote passes
///
/// - `SimpleMajority`: more than half must approve (`n/2 + 1`)
/// - `ThreeFifths`: at least three fifths must approve (`ceil(3n/5)`)
///
/// # Example
///
/// ```
/// use camara_domain::quorum::MajorityRule;
///
/// let rule = MajorityRule::SimpleMajority;
/// assert!(rule.is_satisfied(6, 10));
/// assert!(!rule.is_satisfied(5, 10));
///
/// let qualified = MajorityRule::ThreeFifths;
/// assert!(qualified.is_satisfied(240, 400));
/// assert!(!qualified.is_satisfied(239, 400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MajorityRule {
    /// More than half must approve (n/2 + 1)
    #[default]
    SimpleMajority,

    /// At least three fifths must approve
    ThreeFifths,
}

/// Plenary approval rule per proposal kind
const PLENARY_RULES: [(ProposalKind, MajorityRule); 3] = [
    (ProposalKind::Pl, MajorityRule::SimpleMajority),
    (ProposalKind::Plp, MajorityRule::SimpleMajority),
    (ProposalKind::Pec, MajorityRule::ThreeFifths),
];

impl MajorityRule {
    /// Rule a plenary vote on this kind of proposal must satisfy
    pub fn for_plenary(kind: ProposalKind) -> Self {
        PLENARY_RULES
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rule)| *rule)
            .unwrap_or_default()
    }

    /// Check if the rule is satisfied given approval count and total votes
    pub fn is_satisfied(&self, approvals: usize, total: usize) -> bool {
        if total == 0 {
            return false;
        }
        approvals >= self.min_approvals_needed(total)
    }

    /// Get the minimum approvals needed for this rule given a total count
    pub fn min_approvals_needed(&self, total: usize) -> usize {
        match self {
            MajorityRule::SimpleMajority => total / 2 + 1,
            MajorityRule::ThreeFifths => (3 * total).div_ceil(5),
        }
    }

    /// Get a human-readable description of this rule
    pub fn description(&self) -> &'static str {
        match self {
            MajorityRule::SimpleMajority => "simple majority (more than half)",
            MajorityRule::ThreeFifths => "qualified majority (three fifths)",
        }
    }
}

impl std::fmt::Display for MajorityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for MajorityRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "majority" | "simple_majority" => Ok(MajorityRule::SimpleMajority),
            "three_fifths" | "3/5" => Ok(MajorityRule::ThreeFifths),
            _ => Err(DomainError::invalid_argument(format!(
                "unknown majority rule: {s}. Valid: majority, three_fifths"
            ))),
        }
    }
}
