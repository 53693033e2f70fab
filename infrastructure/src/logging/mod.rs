//! Logging infrastructure — structured round-event logging.
//!
//! Provides [`JsonlRoundLogger`], a JSONL file writer that implements
//! the [`RoundEventLogger`](meme_quorum_application::RoundEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRoundLogger;
