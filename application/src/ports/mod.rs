//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod committee_directory;
pub mod person_directory;
pub mod tramitation_logger;
