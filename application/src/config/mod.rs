//! Application-level configuration.
//!
//! - [`ChamberConfig`] chamber-wide parameters of the tramitation engine

pub mod chamber;

pub use chamber::ChamberConfig;
