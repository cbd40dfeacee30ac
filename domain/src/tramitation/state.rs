//! Tramitation state derived from the voting history

use crate::proposal::{CommitteeName, Location, PlenaryRound, VoteStatus, VotingHistory};
use serde::Serialize;

/// Where a proposal stands in its tramitation
///
/// Never stored: it is read off the last history entry, so the state and
/// the trail cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "at", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TramitationState {
    InCommittee(CommitteeName),
    InPlenary(PlenaryRound),
    Approved,
    Rejected,
    Archived,
}

impl TramitationState {
    pub fn from_history(history: &VotingHistory) -> Self {
        let last = history.last();
        match (&last.location, last.status) {
            (Location::Committee(name), VoteStatus::InProgress) => {
                TramitationState::InCommittee(name.clone())
            }
            (Location::Plenary(round), VoteStatus::InProgress) => {
                TramitationState::InPlenary(*round)
            }
            // only a conclusive bill stops in committee approved
            (_, VoteStatus::Approved) => TramitationState::Approved,
            (Location::Committee(_), VoteStatus::Rejected) => TramitationState::Archived,
            (Location::Plenary(_), VoteStatus::Rejected) => TramitationState::Rejected,
            (_, VoteStatus::Archived) => TramitationState::Archived,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TramitationState::Approved | TramitationState::Rejected | TramitationState::Archived
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TramitationState::InCommittee(_) => "IN_COMMITTEE",
            TramitationState::InPlenary(PlenaryRound::First) => "IN_PLENARY_ROUND_1",
            TramitationState::InPlenary(PlenaryRound::Second) => "IN_PLENARY_ROUND_2",
            TramitationState::Approved => "APPROVED",
            TramitationState::Rejected => "REJECTED",
            TramitationState::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for TramitationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TramitationState::InCommittee(name) => write!(f, "IN_COMMITTEE({name})"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
