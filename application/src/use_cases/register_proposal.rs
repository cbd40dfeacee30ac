//! Register Proposal use case
//!
//! Validates a new bill and stores it under a fresh code.

use crate::config::ChamberConfig;
use crate::error::TramitationError;
use crate::ports::person_directory::{PersonDirectory, Role};
use crate::ports::tramitation_logger::{TramitationEvent, TramitationLogger};
use crate::registry::ProposalRegistry;
use camara_domain::{ProposalCode, ProposalDraft, ProposalPayload};
use std::sync::Arc;
use tracing::info;

/// Raw kind-specific data, as received from the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadInput {
    Pl { conclusive: bool },
    Plp { articles: String },
    Pec { articles: String },
}

impl PayloadInput {
    fn parse(&self) -> Result<ProposalPayload, TramitationError> {
        let payload = match self {
            PayloadInput::Pl { conclusive } => ProposalPayload::pl(*conclusive),
            PayloadInput::Plp { articles } => ProposalPayload::plp(articles)?,
            PayloadInput::Pec { articles } => ProposalPayload::pec(articles)?,
        };
        Ok(payload)
    }
}

/// Input for the RegisterProposal use case
#[derive(Debug, Clone)]
pub struct RegisterProposalInput {
    /// DNI of the author, who must be a registered deputy
    pub author: String,
    pub year: i32,
    pub summary: String,
    /// Comma-separated interest tags
    pub interests: String,
    pub source_url: String,
    pub payload: PayloadInput,
}

impl RegisterProposalInput {
    pub fn new(
        author: impl Into<String>,
        year: i32,
        summary: impl Into<String>,
        interests: impl Into<String>,
        source_url: impl Into<String>,
        payload: PayloadInput,
    ) -> Self {
        Self {
            author: author.into(),
            year,
            summary: summary.into(),
            interests: interests.into(),
            source_url: source_url.into(),
            payload,
        }
    }
}

/// Use case for registering a proposal
pub struct RegisterProposalUseCase<P: PersonDirectory + 'static> {
    registry: Arc<ProposalRegistry>,
    persons: Arc<P>,
    logger: Arc<dyn TramitationLogger>,
    config: ChamberConfig,
}

impl<P: PersonDirectory + 'static> RegisterProposalUseCase<P> {
    pub fn new(
        registry: Arc<ProposalRegistry>,
        persons: Arc<P>,
        logger: Arc<dyn TramitationLogger>,
        config: ChamberConfig,
    ) -> Self {
        Self {
            registry,
            persons,
            logger,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: RegisterProposalInput,
    ) -> Result<ProposalCode, TramitationError> {
        let payload = input.payload.parse()?;
        let draft = ProposalDraft::parse(
            &input.author,
            input.year,
            &input.summary,
            &input.interests,
            &input.source_url,
            payload,
        )?;
        self.config.year_bounds().check(draft.year)?;

        if !self.persons.is_registered(&draft.author).await? {
            return Err(TramitationError::invalid_argument(format!(
                "person {} is not registered",
                draft.author
            )));
        }
        if !self.persons.has_role(&draft.author, Role::Deputy).await? {
            return Err(TramitationError::invalid_argument(format!(
                "person {} is not a deputy",
                draft.author
            )));
        }

        let author = draft.author.clone();
        let code = self
            .registry
            .register(draft, self.config.initial_committee.clone())
            .await;

        info!("Registered {} by {}", code, author);
        self.logger.log(TramitationEvent::new(
            "registered",
            serde_json::json!({
                "code": code,
                "author": author,
                "committee": self.config.initial_committee,
            }),
        ));

        Ok(code)
    }
}
