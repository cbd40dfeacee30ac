//! Person directory port
//!
//! Defines how the engine reads (and minimally updates) person records it
//! does not own.

use async_trait::async_trait;
use camara_domain::AuthorId;
use thiserror::Error;

/// Errors reported by directory adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}

/// Political role a person may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Deputy,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Deputy => "Deputy",
        }
    }
}

/// Directory of registered people
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    /// Whether a person with this id is registered
    async fn is_registered(&self, id: &AuthorId) -> Result<bool, DirectoryError>;

    /// Whether the person currently holds the role
    async fn has_role(&self, id: &AuthorId, role: Role) -> Result<bool, DirectoryError>;

    /// Credit the person with one more approved law
    async fn increment_law_count(&self, id: &AuthorId) -> Result<(), DirectoryError>;

    /// Number of sitting deputies (the size of the house)
    async fn deputy_count(&self) -> Result<usize, DirectoryError>;
}
