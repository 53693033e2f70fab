//! The round aggregator
//!
//! Owns the artifact and the working sets of the current round, and drives
//! each round through `Open → Finalizing → (Accepted | Discarded) → Open`.

use super::config::RoundConfig;
use super::outcome::{DiscardReason, RoundOutcome, RoundReport};
use super::snapshot::RoundSnapshot;
use super::vote::{Standing, VoteTally, count_votes_for};
use crate::core::contribution::Contribution;
use crate::core::error::{DomainError, ValidationError, VoteError};
use crate::core::identity::ParticipantId;
use std::collections::HashMap;

/// Collects contributions and votes for one round at a time and appends
/// each round's winner to the artifact.
///
/// All state is owned; constructors take the initial artifact by value so
/// no outside alias can bypass the invariants.
///
/// # Example
///
/// ```
/// use meme_quorum_domain::round::RoundAggregator;
///
/// let mut aggregator = RoundAggregator::new(Vec::new());
/// aggregator.submit(1, "AI generated memes be like:").unwrap();
/// aggregator.submit(2, "Human generated memes be like:").unwrap();
/// aggregator.vote(1, 2).unwrap();
/// aggregator.vote(3, 2).unwrap();
///
/// assert_eq!(aggregator.select_winner(), Some("Human generated memes be like:"));
/// assert!(aggregator.finalize_round());
/// assert_eq!(aggregator.artifact(), ["Human generated memes be like:"]);
/// assert!(aggregator.current_contributions().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RoundAggregator<I: ParticipantId> {
    artifact: Vec<String>,
    contributions: HashMap<I, String>,
    votes: HashMap<I, I>,
    config: RoundConfig,
    round: usize,
}

impl<I: ParticipantId> RoundAggregator<I> {
    /// Create an aggregator with default limits and completion threshold
    pub fn new(artifact: Vec<String>) -> Self {
        Self::with_config(artifact, RoundConfig::default())
    }

    pub fn with_config(artifact: Vec<String>, config: RoundConfig) -> Self {
        Self {
            artifact,
            contributions: HashMap::new(),
            votes: HashMap::new(),
            config,
            round: 1,
        }
    }

    /// Rebuild an aggregator from a snapshot.
    ///
    /// Contributions are re-validated against `config` and votes are
    /// re-checked against the restored contributions; the first violation
    /// is returned. The round counter starts again at 1.
    pub fn restore(snapshot: RoundSnapshot<I>, config: RoundConfig) -> Result<Self, DomainError> {
        let RoundSnapshot {
            artifact,
            contributions,
            votes,
        } = snapshot;

        let mut aggregator = Self::with_config(artifact, config);
        for (submitter, text) in contributions {
            aggregator.submit(submitter, text)?;
        }
        for (voter, target) in votes {
            aggregator.vote(voter, target)?;
        }
        Ok(aggregator)
    }

    // ==================== Open round ====================

    /// Store `text` as `submitter`'s contribution for this round.
    ///
    /// A second submission from the same identity replaces the first.
    pub fn submit(&mut self, submitter: I, text: impl Into<String>) -> Result<(), ValidationError> {
        let contribution = Contribution::try_new(text, &self.config.limits)?;
        self.contributions
            .insert(submitter, contribution.into_text());
        Ok(())
    }

    /// Record `voter`'s vote for `target`.
    ///
    /// Checked in order: self vote, duplicate vote, unknown target.
    pub fn vote(&mut self, voter: I, target: I) -> Result<(), VoteError> {
        if voter == target {
            return Err(VoteError::SelfVote);
        }
        if self.votes.contains_key(&voter) {
            return Err(VoteError::DuplicateVote);
        }
        if !self.contributions.contains_key(&target) {
            return Err(VoteError::UnknownTarget);
        }

        self.votes.insert(voter, target);
        Ok(())
    }

    /// Votes cast for `target` this round
    pub fn tally(&self, target: &I) -> usize {
        count_votes_for(&self.votes, target)
    }

    /// Tally of every current contributor
    pub fn vote_tally(&self) -> VoteTally<I> {
        VoteTally::from_round(&self.contributions, &self.votes)
    }

    /// Current standings, most votes first
    pub fn standings(&self) -> Vec<Standing<I>> {
        Standing::collect(&self.contributions, &self.vote_tally())
    }

    /// Identity of the current unique leader, if any
    pub fn select_winner_id(&self) -> Option<I> {
        self.vote_tally().winner().cloned()
    }

    /// Text of the current unique leader.
    ///
    /// `None` for an empty round or a tie; a lone contributor always wins.
    pub fn select_winner(&self) -> Option<&str> {
        let tally = self.vote_tally();
        let winner = tally.winner()?;
        self.contributions.get(winner).map(String::as_str)
    }

    // ==================== Finalization ====================

    /// Finalize the round; `true` if a winner was appended to the artifact.
    ///
    /// Contributions and votes are cleared either way.
    pub fn finalize_round(&mut self) -> bool {
        self.conclude_round().is_accepted()
    }

    /// Finalize the round and report what happened
    pub fn conclude_round(&mut self) -> RoundReport<I> {
        let tally = self.vote_tally();
        let standings = Standing::collect(&self.contributions, &tally);
        let winner = tally.winner().cloned();

        let outcome = match &winner {
            Some(_) => RoundOutcome::Accepted,
            None if tally.is_empty() => RoundOutcome::Discarded(DiscardReason::EmptyRound),
            None => RoundOutcome::Discarded(DiscardReason::Tie),
        };

        let accepted_text = winner
            .as_ref()
            .and_then(|id| self.contributions.remove(id));
        if let Some(text) = &accepted_text {
            self.artifact.push(text.clone());
        }

        let votes_cast = self.votes.len();
        self.contributions.clear();
        self.votes.clear();

        let report = RoundReport {
            round: self.round,
            outcome,
            winner,
            accepted_text,
            standings,
            votes_cast,
            artifact_len: self.artifact.len(),
        };
        self.round += 1;
        report
    }

    // ==================== Read-only views ====================

    pub fn current_contributions(&self) -> &HashMap<I, String> {
        &self.contributions
    }

    pub fn votes(&self) -> &HashMap<I, I> {
        &self.votes
    }

    pub fn artifact(&self) -> &[String] {
        &self.artifact
    }

    /// Check if the artifact holds at least `target_len` entries
    pub fn is_complete_at(&self, target_len: usize) -> bool {
        self.artifact.len() >= target_len
    }

    /// Check the artifact against the configured completion policy
    pub fn is_complete(&self) -> bool {
        self.config.completion.is_satisfied(self.artifact.len())
    }

    pub fn completion_threshold(&self) -> usize {
        self.config.completion.threshold()
    }

    /// Current round number (1-indexed)
    pub fn round_number(&self) -> usize {
        self.round
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn snapshot(&self) -> RoundSnapshot<I> {
        RoundSnapshot {
            artifact: self.artifact.clone(),
            contributions: self.contributions.clone(),
            votes: self.votes.clone(),
        }
    }
}
