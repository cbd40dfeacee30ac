//! Output formatter trait

use camara_application::{CommitteeVoteResult, PlenaryVoteResult, TramitationError};
use camara_domain::{Proposal, ProposalCode, TrailEntry};

/// Renders the result of each session command
pub trait OutputFormatter: Send + Sync {
    fn registered(&self, code: &ProposalCode) -> String;

    fn committee_vote(&self, result: &CommitteeVoteResult) -> String;

    fn plenary_vote(&self, result: &PlenaryVoteResult) -> String;

    fn trail(&self, code: &ProposalCode, trail: &[TrailEntry]) -> String;

    fn proposal(&self, proposal: &Proposal) -> String;

    fn list(&self, proposals: &[Proposal]) -> String;

    fn error(&self, error: &TramitationError) -> String;

    /// A line that could not be parsed into a command
    fn usage_error(&self, message: &str) -> String;
}
