//! Logging infrastructure: structured tramitation event log.
//!
//! Provides [`JsonlTramitationLogger`], a JSONL file writer that implements
//! the [`TramitationLogger`](camara_application::TramitationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTramitationLogger;
