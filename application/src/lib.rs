//! Application layer for e-camara
//!
//! This crate contains use cases, port definitions, the proposal registry
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod registry;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChamberConfig;
pub use error::TramitationError;
pub use ports::{
    committee_directory::CommitteeDirectory,
    person_directory::{DirectoryError, PersonDirectory, Role},
    tramitation_logger::{NoTramitationLogger, TramitationEvent, TramitationLogger},
};
pub use registry::{ProposalHandle, ProposalRegistry};
pub use use_cases::engine::TramitationEngine;
pub use use_cases::register_proposal::{PayloadInput, RegisterProposalInput};
pub use use_cases::vote_committee::{CommitteeVoteResult, VoteCommitteeInput};
pub use use_cases::vote_plenary::{PlenaryVoteResult, VotePlenaryInput};
