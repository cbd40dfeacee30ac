//! Committee directory port

use super::person_directory::DirectoryError;
use async_trait::async_trait;
use camara_domain::{CommitteeMember, CommitteeName};

/// Directory of standing committees and their current members
///
/// Membership is read at vote time, so roster changes made by the
/// collaborator apply to the next vote.
#[async_trait]
pub trait CommitteeDirectory: Send + Sync {
    /// Whether a committee with this name exists
    async fn exists(&self, name: &CommitteeName) -> Result<bool, DirectoryError>;

    /// Current members of the committee
    async fn members_of(&self, name: &CommitteeName)
    -> Result<Vec<CommitteeMember>, DirectoryError>;
}
