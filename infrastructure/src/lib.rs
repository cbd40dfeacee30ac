//! Infrastructure layer for e-camara
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod directory;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileChamberConfig, FileConfig, FileLogConfig,
    FileOutputConfig, FileOutputFormat, FileRosterConfig,
};
pub use directory::{
    DirectorySeedError, InMemoryCommitteeDirectory, InMemoryPersonDirectory, PersonRecord,
    directories_from_roster,
};
pub use logging::JsonlTramitationLogger;
