//! Read-only views over the registry

use crate::error::TramitationError;
use crate::registry::ProposalRegistry;
use camara_domain::{Proposal, ProposalCode, TrailEntry};
use std::sync::Arc;

/// Use case for reading proposals and their trails
pub struct TramitationReportUseCase {
    registry: Arc<ProposalRegistry>,
}

impl TramitationReportUseCase {
    pub fn new(registry: Arc<ProposalRegistry>) -> Self {
        Self { registry }
    }

    /// Ordered (location, status) trail of a proposal
    pub async fn trail(&self, code: &ProposalCode) -> Result<Vec<TrailEntry>, TramitationError> {
        let proposal = self.registry.snapshot(code).await?;
        Ok(proposal.trail().to_vec())
    }

    /// Copy of a proposal as it is now
    pub async fn show(&self, code: &ProposalCode) -> Result<Proposal, TramitationError> {
        self.registry.snapshot(code).await
    }

    /// Every proposal, in registration order
    pub async fn list(&self) -> Vec<Proposal> {
        let mut proposals = Vec::new();
        for code in self.registry.codes().await {
            if let Ok(proposal) = self.registry.snapshot(&code).await {
                proposals.push(proposal);
            }
        }
        proposals
    }
}
