//! Port for structured tramitation logging.
//!
//! Defines the [`TramitationLogger`] trait for recording engine events
//! (registrations, committee votes, plenary votes) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured tramitation event for logging.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields. Adapters add the timestamp when writing.
#[derive(Debug, Clone, PartialEq)]
pub struct TramitationEvent {
    /// Event type identifier (e.g., "registered", "committee_vote").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TramitationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging tramitation events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a failed write must
/// not undo a vote that was already recorded.
pub trait TramitationLogger: Send + Sync {
    /// Record a tramitation event.
    fn log(&self, event: TramitationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTramitationLogger;

impl TramitationLogger for NoTramitationLogger {
    fn log(&self, _event: TramitationEvent) {}
}
