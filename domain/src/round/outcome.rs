//! Round outcome types
//!
//! This module defines the result of finalizing a round.

use super::vote::Standing;
use serde::{Deserialize, Serialize};

/// Why a finalized round added nothing to the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// Two or more contributions shared the highest vote count
    Tie,
    /// Nobody contributed
    EmptyRound,
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscardReason::Tie => write!(f, "tie"),
            DiscardReason::EmptyRound => write!(f, "empty round"),
        }
    }
}

/// Outcome of a finalized round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// A unique winner was appended to the artifact
    Accepted,
    /// No winner; the round's contributions were dropped
    Discarded(DiscardReason),
}

impl RoundOutcome {
    /// Check if the outcome is accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, RoundOutcome::Accepted)
    }

    /// Check if the outcome is discarded
    pub fn is_discarded(&self) -> bool {
        matches!(self, RoundOutcome::Discarded(_))
    }

    pub fn discard_reason(&self) -> Option<DiscardReason> {
        match self {
            RoundOutcome::Accepted => None,
            RoundOutcome::Discarded(reason) => Some(*reason),
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Accepted => write!(f, "Accepted"),
            RoundOutcome::Discarded(reason) => write!(f, "Discarded ({})", reason),
        }
    }
}

/// Full record of one finalized round
///
/// # Example
///
/// ```
/// use meme_quorum_domain::round::RoundAggregator;
///
/// let mut aggregator: RoundAggregator<u32> = RoundAggregator::new(vec![]);
/// aggregator.submit(1, "AI generated memes be like:").unwrap();
///
/// let report = aggregator.conclude_round();
/// assert_eq!(report.round, 1);
/// assert!(report.is_accepted());
/// assert_eq!(report.accepted_text.as_deref(), Some("AI generated memes be like:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport<I> {
    /// Round number (1-indexed)
    pub round: usize,
    /// Outcome of this round
    pub outcome: RoundOutcome,
    /// Winning contributor, when accepted
    pub winner: Option<I>,
    /// Text appended to the artifact, when accepted
    pub accepted_text: Option<String>,
    /// Every contributor with their final tally, most votes first
    pub standings: Vec<Standing<I>>,
    /// Number of votes cast in the round
    pub votes_cast: usize,
    /// Artifact length after this round
    pub artifact_len: usize,
}

impl<I> RoundReport<I> {
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }

    /// Vote counts as a compact summary (e.g., "[2·1·0]")
    pub fn vote_summary(&self) -> String {
        let counts = self
            .standings
            .iter()
            .map(|s| s.votes.to_string())
            .collect::<Vec<_>>()
            .join("·");
        format!("[{}]", counts)
    }
}
