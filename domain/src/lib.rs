//! Domain layer for meme-quorum
//!
//! This crate contains the round state machine and its value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Contribution**: a text submitted by one participant for the current round
//! - **Vote**: a participant backing someone else's contribution, once per round
//! - **Artifact**: the ordered list of winning contributions across rounds
//!
//! A round is resolved by [`RoundAggregator::finalize_round`]: the unique
//! most-voted contribution joins the artifact, a tie or an empty round adds
//! nothing, and both working sets are cleared.

pub mod core;
pub mod round;

// Re-export commonly used types
pub use self::core::{
    contribution::{Contribution, ContributionLimits},
    error::{DomainError, ValidationError, VoteError},
    identity::ParticipantId,
};
pub use round::{
    CompletionPolicy, DiscardReason, RoundAggregator, RoundConfig, RoundOutcome, RoundReport,
    RoundSnapshot, Standing, VoteTally,
};
