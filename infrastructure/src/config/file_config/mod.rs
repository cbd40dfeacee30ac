//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types after
//! validation.

mod chamber;
mod output;
mod roster;

pub use chamber::FileChamberConfig;
pub use output::{FileLogConfig, FileOutputConfig, FileOutputFormat};
pub use roster::{FileCommitteeConfig, FilePersonConfig, FileRosterConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("chamber.initial_committee: {0}")]
    InvalidInitialCommittee(String),

    #[error("chamber.house_size cannot be 0")]
    EmptyHouse,

    #[error("chamber.min_year {0} is after the current year")]
    MinYearInFuture(i32),

    #[error("roster.people: {0}")]
    InvalidPersonId(String),

    #[error("roster.people: {0} is listed twice")]
    DuplicatePerson(String),

    #[error("roster.committees: {0}")]
    InvalidCommitteeName(String),

    #[error("roster.committees: {0} is listed twice")]
    DuplicateCommittee(String),

    #[error("roster.committees: {committee} lists unknown member {member}")]
    UnknownMember { committee: String, member: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Engine parameters
    pub chamber: FileChamberConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Event log settings
    pub log: FileLogConfig,
    /// People and committees seeding the in-memory directories
    pub roster: FileRosterConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.chamber.to_chamber_config()?;
        self.roster.validate()
    }
}
