//! Proposal subdomain
//!
//! A proposal (bill) has an immutable identity and content, plus a voting
//! history that grows as it moves through committees and plenary.

pub mod author;
pub mod code;
pub mod entities;
pub mod history;
pub mod kind;
pub mod payload;

pub use author::AuthorId;
pub use code::ProposalCode;
pub use entities::{Proposal, ProposalDraft, YearBounds};
pub use history::{
    CommitteeName, INITIAL_COMMITTEE, Location, PlenaryRound, TrailEntry, VoteStatus, VotingHistory,
};
pub use kind::ProposalKind;
pub use payload::ProposalPayload;
