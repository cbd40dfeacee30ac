//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod engine;
pub mod register_proposal;
pub mod tramitation_report;
pub mod vote_committee;
pub mod vote_plenary;

#[cfg(test)]
pub(crate) mod test_support;
