//! Port for structured round-event logging.
//!
//! Defines the [`RoundEventLogger`] trait for recording what happened in each
//! round (accepted and rejected submissions, votes, finalizations) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL). The trail is never read back.

use serde_json::Value;

/// A structured round event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Timestamps are added by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundEvent {
    /// Event type identifier (e.g., "vote_cast", "round_finalized").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RoundEvent {
    pub const CONTRIBUTION_SUBMITTED: &'static str = "contribution_submitted";
    pub const CONTRIBUTION_REJECTED: &'static str = "contribution_rejected";
    pub const VOTE_CAST: &'static str = "vote_cast";
    pub const VOTE_REJECTED: &'static str = "vote_rejected";
    pub const ROUND_FINALIZED: &'static str = "round_finalized";

    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging round events to a structured log.
///
/// The `log` method is synchronous and non-fallible so a broken log never
/// interrupts a round; adapters drop records they cannot write.
pub trait RoundEventLogger: Send + Sync {
    /// Record a round event.
    fn log(&self, event: RoundEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoRoundLogger;

impl RoundEventLogger for NoRoundLogger {
    fn log(&self, _event: RoundEvent) {}
}
