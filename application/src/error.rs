//! Error taxonomy of the tramitation engine

use crate::ports::person_directory::DirectoryError;
use camara_domain::{DomainError, ProposalCode};
use thiserror::Error;

/// Errors returned by the engine's operations
///
/// Every failure leaves the engine's state as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TramitationError {
    /// Malformed or missing input, caught before touching state
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown proposal code
    #[error("Proposal not found: {0}")]
    ProposalNotFound(String),

    /// Unknown committee
    #[error("Committee not found: {0}")]
    CommitteeNotFound(String),

    /// Vote attempted on a proposal that already reached a final state
    #[error("{0} is already resolved")]
    AlreadyResolved(ProposalCode),

    /// Plenary vote attempted below the minimum presence
    #[error("Quorum not met for {code}: {present} present, {required} required")]
    QuorumNotMet {
        code: ProposalCode,
        present: usize,
        required: usize,
    },

    /// Vote attempted at the wrong stage (e.g. plenary vote in committee)
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

impl TramitationError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TramitationError::InvalidArgument(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TramitationError::ProposalNotFound(_) | TramitationError::CommitteeNotFound(_)
        )
    }

    /// Short identifier of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            TramitationError::InvalidArgument(_) => "invalid_argument",
            TramitationError::ProposalNotFound(_) | TramitationError::CommitteeNotFound(_) => {
                "not_found"
            }
            TramitationError::AlreadyResolved(_) => "already_resolved",
            TramitationError::QuorumNotMet { .. } => "quorum_not_met",
            TramitationError::InvalidTransition(_) => "invalid_transition",
            TramitationError::Directory(_) => "directory",
        }
    }
}

impl From<DomainError> for TramitationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidArgument(message) => TramitationError::InvalidArgument(message),
            DomainError::InvalidTransition(message) => TramitationError::InvalidTransition(message),
        }
    }
}
