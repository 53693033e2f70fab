//! Application layer for meme-quorum
//!
//! This crate contains the round session use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::round_logger::{NoRoundLogger, RoundEvent, RoundEventLogger};
pub use use_cases::round_session::{RoundSession, SessionStatus};
