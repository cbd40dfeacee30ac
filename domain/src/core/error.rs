//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised while building value objects or moving a proposal's voting
/// history. Lookup failures (unknown codes, unknown committees) belong to
/// the application layer, which owns the stores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument(message.into())
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        DomainError::InvalidTransition(message.into())
    }

    /// Check if this error was caused by malformed input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DomainError::InvalidArgument(_))
    }
}
