//! Committee vote rule
//!
//! A committee vote is not a tally of ballots: the outcome is predicted
//! from the committee's composition. In FREE mode members vote for the
//! proposals that touch their interests; otherwise the government bloc
//! decides.

use super::alignment::AlignmentMode;
use super::rule::MajorityRule;
use crate::core::string::intersects;
use serde::{Deserialize, Serialize};

/// What a committee vote needs to know about one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeMember {
    /// Declared interest tags
    pub interests: Vec<String>,
    /// Whether the member's party belongs to the governing coalition
    pub government_aligned: bool,
}

impl CommitteeMember {
    pub fn new(interests: Vec<String>, government_aligned: bool) -> Self {
        Self {
            interests,
            government_aligned,
        }
    }

    /// Whether this member declared any of the given tags
    pub fn shares_interest(&self, tags: &[String]) -> bool {
        intersects(&self.interests, tags)
    }
}

/// Composition counts of a committee for one proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeTally {
    /// Total members
    pub total: usize,
    /// Members sharing at least one interest tag with the proposal
    pub interested: usize,
    /// Members from the governing coalition
    pub government: usize,
}

impl CommitteeTally {
    /// Count a committee's members against a proposal's interest tags
    pub fn count(members: &[CommitteeMember], proposal_interests: &[String]) -> Self {
        Self {
            total: members.len(),
            interested: members
                .iter()
                .filter(|m| m.shares_interest(proposal_interests))
                .count(),
            government: members.iter().filter(|m| m.government_aligned).count(),
        }
    }

    /// Majority threshold (`total/2 + 1`)
    pub fn threshold(&self) -> usize {
        MajorityRule::SimpleMajority.min_approvals_needed(self.total)
    }

    /// Decide the vote under the given alignment mode
    ///
    /// - FREE: interested members reach the threshold
    /// - GOVERNMENT-ALIGNED: government members reach the threshold
    /// - OPPOSITION: government members fall short of the threshold
    pub fn passes(&self, mode: AlignmentMode) -> bool {
        match mode {
            AlignmentMode::Free => self.interested >= self.threshold(),
            AlignmentMode::GovernmentAligned => self.government >= self.threshold(),
            AlignmentMode::Opposition => self.government < self.threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::string::split_list;

    fn committee(interested: usize, government: usize, total: usize) -> CommitteeTally {
        CommitteeTally {
            total,
            interested,
            government,
        }
    }

    #[test]
    fn test_free_mode_uses_interest() {
        // 10 members, 6 interested: 6 >= 6
        assert!(committee(6, 0, 10).passes(AlignmentMode::Free));
        assert!(!committee(5, 10, 10).passes(AlignmentMode::Free));
    }

    #[test]
    fn test_government_mode_uses_coalition() {
        // 10 members, 4 government: 4 < 6
        assert!(!committee(10, 4, 10).passes(AlignmentMode::GovernmentAligned));
        assert!(committee(0, 6, 10).passes(AlignmentMode::GovernmentAligned));
    }

    #[test]
    fn test_opposition_mode_passes_without_government_majority() {
        assert!(committee(0, 4, 10).passes(AlignmentMode::Opposition));
        assert!(committee(0, 5, 10).passes(AlignmentMode::Opposition));
        assert!(!committee(0, 6, 10).passes(AlignmentMode::Opposition));
    }

    #[test]
    fn test_empty_committee() {
        let empty = committee(0, 0, 0);
        assert_eq!(empty.threshold(), 1);
        assert!(!empty.passes(AlignmentMode::Free));
        assert!(!empty.passes(AlignmentMode::GovernmentAligned));
        assert!(empty.passes(AlignmentMode::Opposition));
    }

    #[test]
    fn test_count_members() {
        let tags = split_list("saude,educacao");
        let members = vec![
            CommitteeMember::new(split_list("saude"), true),
            CommitteeMember::new(split_list("transporte,educacao"), false),
            CommitteeMember::new(split_list("transporte"), true),
            CommitteeMember::new(Vec::new(), false),
        ];

        let tally = CommitteeTally::count(&members, &tags);
        assert_eq!(tally.total, 4);
        assert_eq!(tally.interested, 2);
        assert_eq!(tally.government, 2);
    }

    #[test]
    fn test_interest_is_exact_tag_match() {
        let member = CommitteeMember::new(split_list("saude publica"), false);
        assert!(!member.shares_interest(&split_list("saude")));
    }
}
