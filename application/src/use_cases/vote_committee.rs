//! Vote in Committee use case
//!
//! Predicts a committee's decision from its composition and records it.

use crate::error::TramitationError;
use crate::ports::committee_directory::CommitteeDirectory;
use crate::ports::person_directory::PersonDirectory;
use crate::ports::tramitation_logger::{TramitationEvent, TramitationLogger};
use crate::registry::ProposalRegistry;
use camara_domain::{
    AlignmentMode, CommitteeName, CommitteeOutcome, CommitteeTally, NextLocation, ProposalCode,
    TramitationState, apply_committee_vote,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the VoteCommittee use case
#[derive(Debug, Clone)]
pub struct VoteCommitteeInput {
    pub code: ProposalCode,
    pub mode: AlignmentMode,
    /// Destination if the committee approves
    pub next: NextLocation,
}

impl VoteCommitteeInput {
    pub fn new(code: ProposalCode, mode: AlignmentMode, next: NextLocation) -> Self {
        Self { code, mode, next }
    }
}

/// Result of a committee vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeVoteResult {
    pub code: ProposalCode,
    pub committee: CommitteeName,
    pub tally: CommitteeTally,
    pub outcome: CommitteeOutcome,
}

impl CommitteeVoteResult {
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }
}

/// Use case for voting a proposal in its current committee
pub struct VoteCommitteeUseCase<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> {
    registry: Arc<ProposalRegistry>,
    persons: Arc<P>,
    committees: Arc<C>,
    logger: Arc<dyn TramitationLogger>,
}

impl<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> VoteCommitteeUseCase<P, C> {
    pub fn new(
        registry: Arc<ProposalRegistry>,
        persons: Arc<P>,
        committees: Arc<C>,
        logger: Arc<dyn TramitationLogger>,
    ) -> Self {
        Self {
            registry,
            persons,
            committees,
            logger,
        }
    }

    pub async fn execute(
        &self,
        input: VoteCommitteeInput,
    ) -> Result<CommitteeVoteResult, TramitationError> {
        let handle = self.registry.get(&input.code).await?;
        let mut proposal = handle.lock().await;

        let committee = match proposal.state() {
            TramitationState::InCommittee(name) => name,
            state if state.is_terminal() => {
                return Err(TramitationError::AlreadyResolved(input.code));
            }
            state => {
                return Err(TramitationError::InvalidTransition(format!(
                    "{} is not in committee ({state})",
                    input.code
                )));
            }
        };
        input.next.validate_for(&proposal)?;

        if !self.committees.exists(&committee).await? {
            return Err(TramitationError::CommitteeNotFound(committee.to_string()));
        }
        let members = self.committees.members_of(&committee).await?;
        let tally = CommitteeTally::count(&members, proposal.interests());
        let passed = tally.passes(input.mode);
        debug!(
            "{} in {}: {:?} under {} -> {}",
            input.code, committee, tally, input.mode, passed
        );

        // Work on a copy so a failing collaborator leaves the proposal as it was
        let mut updated = proposal.clone();
        let outcome = apply_committee_vote(&mut updated, passed, &input.next)?;
        if outcome.enacts() {
            self.persons.increment_law_count(updated.author()).await?;
        }
        *proposal = updated;
        drop(proposal);

        info!("{} voted in {}: {:?}", input.code, committee, outcome);
        self.logger.log(TramitationEvent::new(
            "committee_vote",
            serde_json::json!({
                "code": input.code,
                "committee": committee,
                "mode": input.mode,
                "tally": tally,
                "passed": passed,
                "result": outcome,
            }),
        ));

        Ok(CommitteeVoteResult {
            code: input.code,
            committee,
            tally,
            outcome,
        })
    }
}
