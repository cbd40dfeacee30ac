//! History transitions for decided votes
//!
//! These functions take a vote outcome that has already been computed and
//! write it into the proposal's history. Preconditions are checked before
//! the first mutation, so a returned error leaves the proposal untouched.

use super::route::NextLocation;
use super::state::TramitationState;
use crate::core::error::DomainError;
use crate::proposal::{Location, PlenaryRound, Proposal, VoteStatus};
use serde::Serialize;

/// What a committee vote did to the proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "to", rename_all = "snake_case")]
pub enum CommitteeOutcome {
    /// Approved and moved to another committee or to plenary
    Advanced(Location),
    /// Approved and closed in committee (conclusive bill)
    Approved,
    /// Rejected; the proposal is archived
    Archived,
}

impl CommitteeOutcome {
    pub fn passed(&self) -> bool {
        !matches!(self, CommitteeOutcome::Archived)
    }

    /// Whether the proposal became law
    pub fn enacts(&self) -> bool {
        matches!(self, CommitteeOutcome::Approved)
    }
}

/// What a plenary vote did to the proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "round", rename_all = "snake_case")]
pub enum PlenaryOutcome {
    /// Round approved, the next round is open (PEC)
    NextRound(PlenaryRound),
    Approved,
    Rejected,
}

impl PlenaryOutcome {
    pub fn passed(&self) -> bool {
        !matches!(self, PlenaryOutcome::Rejected)
    }

    /// Whether the proposal became law
    pub fn enacts(&self) -> bool {
        matches!(self, PlenaryOutcome::Approved)
    }
}

/// Record a committee decision
pub fn apply_committee_vote(
    proposal: &mut Proposal,
    passed: bool,
    next: &NextLocation,
) -> Result<CommitteeOutcome, DomainError> {
    let state = proposal.state();
    if !matches!(state, TramitationState::InCommittee(_)) {
        return Err(DomainError::invalid_transition(format!(
            "{} is not in committee ({state})",
            proposal.code()
        )));
    }
    next.validate_for(proposal)?;

    if !passed {
        proposal.resolve_stage(VoteStatus::Rejected)?;
        return Ok(CommitteeOutcome::Archived);
    }

    proposal.resolve_stage(VoteStatus::Approved)?;
    let destination = match next {
        NextLocation::Closing => return Ok(CommitteeOutcome::Approved),
        NextLocation::Plenary => Location::Plenary(PlenaryRound::First),
        NextLocation::Committee(name) => Location::Committee(name.clone()),
    };
    proposal.enter_stage(destination.clone())?;
    Ok(CommitteeOutcome::Advanced(destination))
}

/// Record a plenary decision
pub fn apply_plenary_vote(
    proposal: &mut Proposal,
    passed: bool,
) -> Result<PlenaryOutcome, DomainError> {
    let round = match proposal.state() {
        TramitationState::InPlenary(round) => round,
        state => {
            return Err(DomainError::invalid_transition(format!(
                "{} is not in plenary ({state})",
                proposal.code()
            )));
        }
    };

    if !passed {
        proposal.resolve_stage(VoteStatus::Rejected)?;
        return Ok(PlenaryOutcome::Rejected);
    }

    proposal.resolve_stage(VoteStatus::Approved)?;
    if round.number() < proposal.kind().plenary_rounds() {
        proposal.enter_stage(Location::Plenary(PlenaryRound::Second))?;
        return Ok(PlenaryOutcome::NextRound(PlenaryRound::Second));
    }
    Ok(PlenaryOutcome::Approved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::{
        CommitteeName, ProposalCode, ProposalDraft, ProposalKind, ProposalPayload,
    };

    fn proposal(payload: ProposalPayload) -> Proposal {
        let kind = payload.kind();
        let draft = ProposalDraft::parse(
            "061222222-0",
            2016,
            "Ementa",
            "saude",
            "http://example.com",
            payload,
        )
        .unwrap();
        Proposal::new(
            ProposalCode::new(kind, 1, 2016),
            draft,
            CommitteeName::new("CCJC").unwrap(),
        )
    }

    fn statuses(proposal: &Proposal) -> Vec<(String, VoteStatus)> {
        proposal
            .trail()
            .iter()
            .map(|e| (e.location.token().to_string(), e.status))
            .collect()
    }

    #[test]
    fn test_committee_to_committee() {
        let mut p = proposal(ProposalPayload::pl(false));
        let next: NextLocation = "CTF".parse().unwrap();

        let outcome = apply_committee_vote(&mut p, true, &next).unwrap();
        assert!(matches!(outcome, CommitteeOutcome::Advanced(Location::Committee(_))));
        assert_eq!(
            statuses(&p),
            vec![
                ("CCJC".to_string(), VoteStatus::Approved),
                ("CTF".to_string(), VoteStatus::InProgress),
            ]
        );
    }

    #[test]
    fn test_committee_to_plenary() {
        let mut p = proposal(ProposalPayload::plp("153").unwrap());
        let outcome = apply_committee_vote(&mut p, true, &NextLocation::Plenary).unwrap();

        assert_eq!(
            outcome,
            CommitteeOutcome::Advanced(Location::Plenary(PlenaryRound::First))
        );
        assert_eq!(p.state(), TramitationState::InPlenary(PlenaryRound::First));
    }

    #[test]
    fn test_committee_rejection_archives() {
        let mut p = proposal(ProposalPayload::pl(false));
        let outcome = apply_committee_vote(&mut p, false, &NextLocation::Plenary).unwrap();

        assert_eq!(outcome, CommitteeOutcome::Archived);
        assert_eq!(p.state(), TramitationState::Archived);
        assert_eq!(statuses(&p), vec![("CCJC".to_string(), VoteStatus::Rejected)]);
    }

    #[test]
    fn test_conclusive_bill_closes_in_committee() {
        let mut p = proposal(ProposalPayload::pl(true));
        let outcome = apply_committee_vote(&mut p, true, &NextLocation::Closing).unwrap();

        assert!(outcome.enacts());
        assert_eq!(p.state(), TramitationState::Approved);
        assert_eq!(p.trail().len(), 1);
    }

    #[test]
    fn test_non_conclusive_cannot_close() {
        let mut p = proposal(ProposalPayload::pec("7").unwrap());
        let before = p.clone();

        let err = apply_committee_vote(&mut p, true, &NextLocation::Closing).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(p, before);
    }

    #[test]
    fn test_pec_needs_two_rounds() {
        let mut p = proposal(ProposalPayload::pec("7").unwrap());
        apply_committee_vote(&mut p, true, &NextLocation::Plenary).unwrap();

        let first = apply_plenary_vote(&mut p, true).unwrap();
        assert_eq!(first, PlenaryOutcome::NextRound(PlenaryRound::Second));
        assert_eq!(p.state(), TramitationState::InPlenary(PlenaryRound::Second));

        let second = apply_plenary_vote(&mut p, true).unwrap();
        assert_eq!(second, PlenaryOutcome::Approved);
        assert_eq!(p.state(), TramitationState::Approved);
        assert_eq!(p.trail().len(), 3);
    }

    #[test]
    fn test_pl_single_round() {
        let mut p = proposal(ProposalPayload::pl(false));
        apply_committee_vote(&mut p, true, &NextLocation::Plenary).unwrap();

        assert_eq!(apply_plenary_vote(&mut p, true).unwrap(), PlenaryOutcome::Approved);
        assert_eq!(p.trail().len(), 2);
    }

    #[test]
    fn test_plenary_rejection() {
        let mut p = proposal(ProposalPayload::pl(false));
        apply_committee_vote(&mut p, true, &NextLocation::Plenary).unwrap();

        assert_eq!(apply_plenary_vote(&mut p, false).unwrap(), PlenaryOutcome::Rejected);
        assert_eq!(p.state(), TramitationState::Rejected);
    }

    #[test]
    fn test_wrong_stage() {
        let mut p = proposal(ProposalPayload::pl(false));
        assert!(matches!(
            apply_plenary_vote(&mut p, true),
            Err(DomainError::InvalidTransition(_))
        ));

        apply_committee_vote(&mut p, true, &NextLocation::Plenary).unwrap();
        assert!(matches!(
            apply_committee_vote(&mut p, true, &NextLocation::Plenary),
            Err(DomainError::InvalidTransition(_))
        ));
        assert_eq!(p.kind(), ProposalKind::Pl);
    }
}
