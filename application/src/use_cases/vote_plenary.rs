//! Vote in Plenary use case
//!
//! Checks the quorum, tallies the ballots and records the round.

use crate::error::TramitationError;
use crate::ports::person_directory::PersonDirectory;
use crate::ports::tramitation_logger::{TramitationEvent, TramitationLogger};
use crate::registry::ProposalRegistry;
use camara_domain::{
    AlignmentMode, MajorityRule, PlenaryOutcome, PlenaryRound, PlenaryTally, ProposalCode,
    QuorumGate, TramitationState, apply_plenary_vote,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the VotePlenary use case
#[derive(Debug, Clone)]
pub struct VotePlenaryInput {
    pub code: ProposalCode,
    /// Ballots in favor
    pub favorable: usize,
    /// Members present at the session
    pub present: usize,
    pub mode: AlignmentMode,
}

impl VotePlenaryInput {
    pub fn new(code: ProposalCode, favorable: usize, present: usize, mode: AlignmentMode) -> Self {
        Self {
            code,
            favorable,
            present,
            mode,
        }
    }
}

/// Result of a plenary vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlenaryVoteResult {
    pub code: ProposalCode,
    pub round: PlenaryRound,
    pub tally: PlenaryTally,
    pub rule: MajorityRule,
    pub outcome: PlenaryOutcome,
}

impl PlenaryVoteResult {
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }
}

/// Use case for voting a proposal on the plenary floor
pub struct VotePlenaryUseCase<P: PersonDirectory + 'static> {
    registry: Arc<ProposalRegistry>,
    persons: Arc<P>,
    logger: Arc<dyn TramitationLogger>,
    /// Overrides the directory's deputy count when set
    house_size: Option<usize>,
}

impl<P: PersonDirectory + 'static> VotePlenaryUseCase<P> {
    pub fn new(
        registry: Arc<ProposalRegistry>,
        persons: Arc<P>,
        logger: Arc<dyn TramitationLogger>,
        house_size: Option<usize>,
    ) -> Self {
        Self {
            registry,
            persons,
            logger,
            house_size,
        }
    }

    async fn quorum_gate(&self) -> Result<QuorumGate, TramitationError> {
        let house_size = match self.house_size {
            Some(size) => size,
            None => self.persons.deputy_count().await?,
        };
        Ok(QuorumGate::new(house_size))
    }

    pub async fn execute(
        &self,
        input: VotePlenaryInput,
    ) -> Result<PlenaryVoteResult, TramitationError> {
        let handle = self.registry.get(&input.code).await?;
        let mut proposal = handle.lock().await;

        let round = match proposal.state() {
            TramitationState::InPlenary(round) => round,
            state if state.is_terminal() => {
                return Err(TramitationError::AlreadyResolved(input.code));
            }
            state => {
                return Err(TramitationError::InvalidTransition(format!(
                    "{} is not in plenary ({state})",
                    input.code
                )));
            }
        };

        let tally = PlenaryTally::new(input.favorable, input.present)?;
        let gate = self.quorum_gate().await?;
        gate.check_presence(input.present)?;
        if !gate.admits(input.present) {
            warn!(
                "Quorum not met for {}: {} of {} present",
                input.code,
                input.present,
                gate.house_size()
            );
            return Err(TramitationError::QuorumNotMet {
                code: input.code,
                present: input.present,
                required: gate.minimum(),
            });
        }

        let rule = MajorityRule::for_plenary(proposal.kind());
        let passed = tally.passes(proposal.kind(), input.mode);
        debug!(
            "{} round {}: {}/{} under {} ({}) -> {}",
            input.code,
            round.number(),
            tally.favorable,
            tally.present,
            rule,
            input.mode,
            passed
        );

        let mut updated = proposal.clone();
        let outcome = apply_plenary_vote(&mut updated, passed)?;
        if outcome.enacts() {
            self.persons.increment_law_count(updated.author()).await?;
        }
        *proposal = updated;
        drop(proposal);

        info!("{} voted in plenary round {}: {:?}", input.code, round.number(), outcome);
        self.logger.log(TramitationEvent::new(
            "plenary_vote",
            serde_json::json!({
                "code": input.code,
                "round": round.number(),
                "mode": input.mode,
                "favorable": tally.favorable,
                "present": tally.present,
                "rule": rule.to_string(),
                "passed": passed,
                "result": outcome,
            }),
        ));

        Ok(PlenaryVoteResult {
            code: input.code,
            round,
            tally,
            rule,
            outcome,
        })
    }
}
