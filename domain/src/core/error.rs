//! Domain error types

use thiserror::Error;

/// Rejection reasons for a submitted contribution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text must be between {min} and {max} characters")]
    LengthOutOfRange { len: usize, min: usize, max: usize },
}

/// Rejection reasons for a cast vote
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteError {
    #[error("You cannot vote for yourself")]
    SelfVote,

    #[error("You have already voted")]
    DuplicateVote,

    #[error("The user you are voting for does not exist")]
    UnknownTarget,
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Vote(#[from] VoteError),
}
