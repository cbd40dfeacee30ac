//! Tramitation engine
//!
//! Single entry point bundling the registry, the collaborators and every
//! use case. Cloning the engine shares the same registry.

use crate::config::ChamberConfig;
use crate::error::TramitationError;
use crate::ports::committee_directory::CommitteeDirectory;
use crate::ports::person_directory::PersonDirectory;
use crate::ports::tramitation_logger::{NoTramitationLogger, TramitationLogger};
use crate::registry::ProposalRegistry;
use crate::use_cases::register_proposal::{RegisterProposalInput, RegisterProposalUseCase};
use crate::use_cases::tramitation_report::TramitationReportUseCase;
use crate::use_cases::vote_committee::{
    CommitteeVoteResult, VoteCommitteeInput, VoteCommitteeUseCase,
};
use crate::use_cases::vote_plenary::{PlenaryVoteResult, VotePlenaryInput, VotePlenaryUseCase};
use camara_domain::{Proposal, ProposalCode, TrailEntry};
use std::sync::Arc;

pub struct TramitationEngine<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> {
    registry: Arc<ProposalRegistry>,
    persons: Arc<P>,
    committees: Arc<C>,
    logger: Arc<dyn TramitationLogger>,
    config: ChamberConfig,
}

impl<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> Clone
    for TramitationEngine<P, C>
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            persons: Arc::clone(&self.persons),
            committees: Arc::clone(&self.committees),
            logger: Arc::clone(&self.logger),
            config: self.config.clone(),
        }
    }
}

impl<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> TramitationEngine<P, C> {
    pub fn new(persons: Arc<P>, committees: Arc<C>, config: ChamberConfig) -> Self {
        Self {
            registry: Arc::new(ProposalRegistry::new()),
            persons,
            committees,
            logger: Arc::new(NoTramitationLogger),
            config,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn TramitationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &Arc<ProposalRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &ChamberConfig {
        &self.config
    }

    pub async fn register(
        &self,
        input: RegisterProposalInput,
    ) -> Result<ProposalCode, TramitationError> {
        RegisterProposalUseCase::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.persons),
            Arc::clone(&self.logger),
            self.config.clone(),
        )
        .execute(input)
        .await
    }

    pub async fn vote_committee(
        &self,
        input: VoteCommitteeInput,
    ) -> Result<CommitteeVoteResult, TramitationError> {
        VoteCommitteeUseCase::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.persons),
            Arc::clone(&self.committees),
            Arc::clone(&self.logger),
        )
        .execute(input)
        .await
    }

    pub async fn vote_plenary(
        &self,
        input: VotePlenaryInput,
    ) -> Result<PlenaryVoteResult, TramitationError> {
        VotePlenaryUseCase::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.persons),
            Arc::clone(&self.logger),
            self.config.house_size,
        )
        .execute(input)
        .await
    }

    fn report(&self) -> TramitationReportUseCase {
        TramitationReportUseCase::new(Arc::clone(&self.registry))
    }

    pub async fn trail(&self, code: &ProposalCode) -> Result<Vec<TrailEntry>, TramitationError> {
        self.report().trail(code).await
    }

    pub async fn show(&self, code: &ProposalCode) -> Result<Proposal, TramitationError> {
        self.report().show(code).await
    }

    pub async fn list(&self) -> Vec<Proposal> {
        self.report().list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::register_proposal::PayloadInput;
    use crate::use_cases::test_support::{
        AUTHOR, FakeCommittees, FakePersons, RecordingLogger, member,
    };
    use camara_domain::{
        AlignmentMode, CommitteeMember, NextLocation, PlenaryRound, TramitationState, VoteStatus,
    };

    type Engine = TramitationEngine<FakePersons, FakeCommittees>;

    /// 10 members; the first `interested` share "saude", the first
    /// `government` belong to the coalition
    fn committee(interested: usize, government: usize) -> Vec<CommitteeMember> {
        (0..10)
            .map(|i| {
                let tags: &[&str] = if i < interested { &["saude"] } else { &["cultura"] };
                member(tags, i < government)
            })
            .collect()
    }

    fn engine(ccjc: Vec<CommitteeMember>) -> (Engine, Arc<FakePersons>, Arc<RecordingLogger>) {
        let persons = Arc::new(FakePersons::with_deputy(AUTHOR));
        let committees = FakeCommittees::default();
        committees.insert("CCJC", ccjc);
        let logger = Arc::new(RecordingLogger::default());
        let engine = TramitationEngine::new(
            Arc::clone(&persons),
            Arc::new(committees),
            ChamberConfig::default().with_house_size(513),
        )
        .with_logger(logger.clone());
        (engine, persons, logger)
    }

    fn input(payload: PayloadInput) -> RegisterProposalInput {
        RegisterProposalInput::new(
            AUTHOR,
            2016,
            "Ementa",
            "saude",
            "http://example.com",
            payload,
        )
    }

    fn pec() -> RegisterProposalInput {
        input(PayloadInput::Pec {
            articles: "7".to_string(),
        })
    }

    #[tokio::test]
    async fn test_free_committee_passes_at_threshold() {
        let (engine, _, _) = engine(committee(6, 0));
        let code = engine
            .register(input(PayloadInput::Pl { conclusive: false }))
            .await
            .unwrap();

        let result = engine
            .vote_committee(VoteCommitteeInput::new(
                code.clone(),
                AlignmentMode::Free,
                NextLocation::Plenary,
            ))
            .await
            .unwrap();

        assert!(result.passed());
        assert_eq!(result.tally.threshold(), 6);
        let proposal = engine.show(&code).await.unwrap();
        assert_eq!(proposal.state(), TramitationState::InPlenary(PlenaryRound::First));
    }

    #[tokio::test]
    async fn test_government_committee_short_archives() {
        let (engine, _, _) = engine(committee(10, 4));
        let code = engine
            .register(input(PayloadInput::Pl { conclusive: false }))
            .await
            .unwrap();

        let result = engine
            .vote_committee(VoteCommitteeInput::new(
                code.clone(),
                AlignmentMode::GovernmentAligned,
                NextLocation::Plenary,
            ))
            .await
            .unwrap();

        assert!(!result.passed());
        let proposal = engine.show(&code).await.unwrap();
        assert_eq!(proposal.state(), TramitationState::Archived);
    }

    #[tokio::test]
    async fn test_pec_round_two_rejection() {
        let (engine, persons, _) = engine(committee(6, 6));
        let code = engine.register(pec()).await.unwrap();
        engine
            .vote_committee(VoteCommitteeInput::new(
                code.clone(),
                AlignmentMode::GovernmentAligned,
                NextLocation::Plenary,
            ))
            .await
            .unwrap();

        let first = engine
            .vote_plenary(VotePlenaryInput::new(code.clone(), 240, 400, AlignmentMode::Free))
            .await
            .unwrap();
        assert!(first.passed());
        assert_eq!(
            engine.show(&code).await.unwrap().state(),
            TramitationState::InPlenary(PlenaryRound::Second)
        );

        let second = engine
            .vote_plenary(VotePlenaryInput::new(code.clone(), 200, 400, AlignmentMode::Free))
            .await
            .unwrap();
        assert!(!second.passed());
        assert_eq!(engine.show(&code).await.unwrap().state(), TramitationState::Rejected);
        assert_eq!(persons.law_count(AUTHOR), 0);

        let statuses: Vec<_> = engine
            .trail(&code)
            .await
            .unwrap()
            .iter()
            .map(|entry| entry.status)
            .collect();
        assert_eq!(
            statuses,
            vec![VoteStatus::Approved, VoteStatus::Approved, VoteStatus::Rejected]
        );
    }

    #[tokio::test]
    async fn test_quorum_failure_keeps_trail() {
        let (engine, _, logger) = engine(committee(6, 0));
        let code = engine.register(pec()).await.unwrap();
        engine
            .vote_committee(VoteCommitteeInput::new(
                code.clone(),
                AlignmentMode::Free,
                NextLocation::Plenary,
            ))
            .await
            .unwrap();
        let before = engine.trail(&code).await.unwrap();
        let events = logger.events().len();

        let err = engine
            .vote_plenary(VotePlenaryInput::new(code.clone(), 150, 200, AlignmentMode::Free))
            .await
            .unwrap_err();

        assert!(matches!(err, TramitationError::QuorumNotMet { .. }));
        assert_eq!(engine.trail(&code).await.unwrap(), before);
        assert_eq!(logger.events().len(), events);
    }

    #[tokio::test]
    async fn test_events_are_logged() {
        let (engine, _, logger) = engine(committee(6, 0));
        let code = engine
            .register(input(PayloadInput::Pl { conclusive: true }))
            .await
            .unwrap();
        engine
            .vote_committee(VoteCommitteeInput::new(
                code,
                AlignmentMode::Free,
                NextLocation::Closing,
            ))
            .await
            .unwrap();

        let types: Vec<_> = logger.events().iter().map(|e| e.event_type).collect();
        assert_eq!(types, vec!["registered", "committee_vote"]);
        let vote = &logger.events()[1].payload;
        assert_eq!(vote["code"], "PL 1/2016");
        assert_eq!(vote["mode"], "FREE");
        assert_eq!(vote["passed"], true);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_votes_on_same_code_serialize() {
        let (engine, _, _) = engine(committee(10, 10));
        let code = engine
            .register(input(PayloadInput::Pl { conclusive: true }))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let engine = engine.clone();
            let code = code.clone();
            handles.push(tokio::spawn(async move {
                engine
                    .vote_committee(VoteCommitteeInput::new(
                        code,
                        AlignmentMode::Free,
                        NextLocation::Closing,
                    ))
                    .await
            }));
        }

        let mut passed = 0;
        let mut resolved = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => passed += 1,
                Err(TramitationError::AlreadyResolved(_)) => resolved += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(passed, 1);
        assert_eq!(resolved, 7);
        assert_eq!(engine.trail(&code).await.unwrap().len(), 1);
    }
}
