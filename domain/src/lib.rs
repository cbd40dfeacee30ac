//! Domain layer for e-camara
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Proposal
//!
//! A bill (PL, PLP or PEC) identified by a code such as `PL 1/2016`. Its
//! content is fixed at registration; its voting history grows as it moves
//! from committee to committee and on to the plenary floor.
//!
//! ## Quorum
//!
//! Pure rules deciding committee and plenary votes. The outcome depends on
//! the proposal kind and on the alignment mode of the vote (free,
//! government-aligned or opposition).
//!
//! ## Tramitation
//!
//! The state machine that writes vote outcomes into the history and
//! decides where the proposal goes next.

pub mod config;
pub mod core;
pub mod proposal;
pub mod quorum;
pub mod tramitation;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use proposal::{
    AuthorId, CommitteeName, INITIAL_COMMITTEE, Location, PlenaryRound, Proposal, ProposalCode,
    ProposalDraft, ProposalKind, ProposalPayload, TrailEntry, VoteStatus, VotingHistory,
    YearBounds,
};
pub use quorum::{
    AlignmentMode, CommitteeMember, CommitteeTally, MajorityRule, PlenaryTally, QuorumGate,
};
pub use tramitation::{
    CommitteeOutcome, NextLocation, PlenaryOutcome, TramitationState, apply_committee_vote,
    apply_plenary_vote,
};
