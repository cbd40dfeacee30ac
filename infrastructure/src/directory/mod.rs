//! In-memory directory adapters
//!
//! Implement the [`PersonDirectory`](camara_application::PersonDirectory)
//! and [`CommitteeDirectory`](camara_application::CommitteeDirectory) ports
//! over the `[roster]` section of the configuration.

mod committee;
mod person;

pub use committee::InMemoryCommitteeDirectory;
pub use person::{InMemoryPersonDirectory, PersonRecord};

use crate::config::FileRosterConfig;
use camara_domain::DomainError;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while seeding directories from a roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectorySeedError {
    #[error("Invalid roster entry: {0}")]
    InvalidEntry(#[from] DomainError),

    #[error("Person {0} is listed twice")]
    DuplicatePerson(String),

    #[error("Committee {0} is listed twice")]
    DuplicateCommittee(String),

    #[error("Committee {committee} lists unknown member {member}")]
    UnknownMember { committee: String, member: String },
}

/// Build both directories from a roster, sharing the person records
pub fn directories_from_roster(
    roster: &FileRosterConfig,
) -> Result<(Arc<InMemoryPersonDirectory>, Arc<InMemoryCommitteeDirectory>), DirectorySeedError> {
    let persons = Arc::new(InMemoryPersonDirectory::from_roster(roster)?);
    let committees = Arc::new(InMemoryCommitteeDirectory::from_roster(
        roster,
        Arc::clone(&persons),
    )?);
    Ok((persons, committees))
}
