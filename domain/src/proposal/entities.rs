//! Proposal entity

use super::author::AuthorId;
use super::code::ProposalCode;
use super::history::{CommitteeName, Location, TrailEntry, VoteStatus, VotingHistory};
use super::kind::ProposalKind;
use super::payload::ProposalPayload;
use crate::core::error::DomainError;
use crate::core::string::split_list;
use crate::tramitation::state::TramitationState;
use serde::Serialize;

/// Accepted range for a proposal's year, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    pub fn check(&self, year: i32) -> Result<(), DomainError> {
        if year < self.min {
            return Err(DomainError::invalid_argument(format!(
                "year {year} is before {}",
                self.min
            )));
        }
        if year > self.max {
            return Err(DomainError::invalid_argument(format!(
                "year {year} is after {}",
                self.max
            )));
        }
        Ok(())
    }
}

/// Validated registration data for a new proposal
///
/// Everything except the code and the voting history, which the registry
/// assigns on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDraft {
    pub author: AuthorId,
    pub year: i32,
    pub summary: String,
    pub interests: Vec<String>,
    pub source_url: String,
    pub payload: ProposalPayload,
}

impl ProposalDraft {
    /// Validate raw registration input
    ///
    /// `interests` is a comma-separated list. The year range is checked
    /// separately with [`YearBounds`] since it depends on the clock.
    pub fn parse(
        author: &str,
        year: i32,
        summary: &str,
        interests: &str,
        source_url: &str,
        payload: ProposalPayload,
    ) -> Result<Self, DomainError> {
        let author = AuthorId::parse(author)?;

        if summary.trim().is_empty() {
            return Err(DomainError::invalid_argument("summary cannot be empty"));
        }

        let interests = split_list(interests);
        if interests.is_empty() {
            return Err(DomainError::invalid_argument("interests cannot be empty"));
        }

        if source_url.trim().is_empty() {
            return Err(DomainError::invalid_argument("url cannot be empty"));
        }

        Ok(Self {
            author,
            year,
            summary: summary.trim().to_string(),
            interests,
            source_url: source_url.trim().to_string(),
            payload,
        })
    }

    pub fn kind(&self) -> ProposalKind {
        self.payload.kind()
    }
}

/// A legislative proposal tracked through committees and plenary (Entity)
///
/// Identity and content are fixed at registration; the voting history is
/// the only mutable part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proposal {
    code: ProposalCode,
    author: AuthorId,
    year: i32,
    summary: String,
    interests: Vec<String>,
    source_url: String,
    payload: ProposalPayload,
    history: VotingHistory,
}

impl Proposal {
    pub fn new(code: ProposalCode, draft: ProposalDraft, initial_committee: CommitteeName) -> Self {
        Self {
            code,
            author: draft.author,
            year: draft.year,
            summary: draft.summary,
            interests: draft.interests,
            source_url: draft.source_url,
            payload: draft.payload,
            history: VotingHistory::new(initial_committee),
        }
    }

    pub fn code(&self) -> &ProposalCode {
        &self.code
    }

    pub fn kind(&self) -> ProposalKind {
        self.payload.kind()
    }

    pub fn author(&self) -> &AuthorId {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn payload(&self) -> &ProposalPayload {
        &self.payload
    }

    pub fn is_conclusive(&self) -> bool {
        self.payload.is_conclusive()
    }

    pub fn history(&self) -> &VotingHistory {
        &self.history
    }

    pub fn trail(&self) -> &[TrailEntry] {
        self.history.entries()
    }

    pub fn current_location(&self) -> &Location {
        &self.history.last().location
    }

    pub fn current_status(&self) -> VoteStatus {
        self.history.last().status
    }

    pub fn state(&self) -> TramitationState {
        TramitationState::from_history(&self.history)
    }

    /// Enter a new stage, appending `(location, IN_PROGRESS)`
    pub fn enter_stage(&mut self, location: Location) -> Result<(), DomainError> {
        self.history.enter(location)
    }

    /// Resolve the current stage
    pub fn resolve_stage(&mut self, status: VoteStatus) -> Result<(), DomainError> {
        self.history.resolve(status)
    }

    /// Single history mutator
    ///
    /// With a location, enters that stage in progress and `status` must be
    /// `InProgress`; without one, overwrites the status of the current stage.
    pub fn append_or_update_last_status(
        &mut self,
        location: Option<Location>,
        status: VoteStatus,
    ) -> Result<(), DomainError> {
        match location {
            Some(location) => {
                if status != VoteStatus::InProgress {
                    return Err(DomainError::invalid_transition(
                        "a new stage always starts in progress",
                    ));
                }
                self.enter_stage(location)
            }
            None => self.resolve_stage(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(payload: ProposalPayload) -> ProposalDraft {
        ProposalDraft::parse(
            "061222222-0",
            2016,
            "Institui a semana da saude",
            "saude, educacao",
            "http://example.com/pl",
            payload,
        )
        .unwrap()
    }

    fn proposal() -> Proposal {
        Proposal::new(
            ProposalCode::new(ProposalKind::Pl, 1, 2016),
            draft(ProposalPayload::pl(true)),
            CommitteeName::new("CCJC").unwrap(),
        )
    }

    #[test]
    fn test_draft_validation() {
        let payload = ProposalPayload::pl(false);
        assert!(ProposalDraft::parse("", 2016, "s", "i", "u", payload.clone()).is_err());
        assert!(ProposalDraft::parse("061222222-0", 2016, " ", "i", "u", payload.clone()).is_err());
        assert!(ProposalDraft::parse("061222222-0", 2016, "s", ",", "u", payload.clone()).is_err());
        assert!(ProposalDraft::parse("061222222-0", 2016, "s", "i", "", payload).is_err());
    }

    #[test]
    fn test_year_bounds() {
        let bounds = YearBounds { min: 1988, max: 2020 };
        assert!(bounds.check(1987).is_err());
        assert!(bounds.check(1988).is_ok());
        assert!(bounds.check(2020).is_ok());
        assert!(bounds.check(2021).is_err());
    }

    #[test]
    fn test_new_proposal_state() {
        let proposal = proposal();
        assert_eq!(proposal.kind(), ProposalKind::Pl);
        assert!(proposal.is_conclusive());
        assert_eq!(proposal.interests(), ["saude", "educacao"]);
        assert_eq!(proposal.trail().len(), 1);
        assert_eq!(proposal.current_location().token(), "CCJC");
        assert_eq!(proposal.current_status(), VoteStatus::InProgress);
    }

    #[test]
    fn test_append_or_update_last_status() {
        let mut proposal = proposal();

        proposal
            .append_or_update_last_status(None, VoteStatus::Approved)
            .unwrap();
        proposal
            .append_or_update_last_status(
                Some(Location::committee("CTF").unwrap()),
                VoteStatus::InProgress,
            )
            .unwrap();

        assert_eq!(proposal.trail().len(), 2);
        assert_eq!(proposal.current_location().token(), "CTF");

        proposal
            .append_or_update_last_status(None, VoteStatus::Rejected)
            .unwrap();
        let err = proposal
            .append_or_update_last_status(None, VoteStatus::Approved)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
        assert_eq!(proposal.current_status(), VoteStatus::Rejected);
    }

    #[test]
    fn test_new_stage_must_start_in_progress() {
        let mut proposal = proposal();
        proposal.resolve_stage(VoteStatus::Approved).unwrap();
        assert!(
            proposal
                .append_or_update_last_status(
                    Some(Location::committee("CTF").unwrap()),
                    VoteStatus::Approved,
                )
                .is_err()
        );
        assert_eq!(proposal.trail().len(), 1);
    }
}
