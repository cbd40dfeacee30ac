//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: comma-list parsing helpers

pub mod error;
pub mod string;
