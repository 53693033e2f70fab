//! Round session use case
//!
//! Holds the single aggregator of a running game behind one lock, so that a
//! caller serving several users (REPL, request handler) can share it. Every
//! mutation is traced and mirrored to the round-event log. Events are written
//! while the lock is held, so the log order is the order the aggregator saw.

use crate::ports::round_logger::{NoRoundLogger, RoundEvent, RoundEventLogger};
use meme_quorum_domain::{
    ParticipantId, RoundAggregator, RoundConfig, RoundReport, RoundSnapshot, Standing,
    ValidationError, VoteError,
};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Progress of a running session, read under one lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub round: usize,
    pub artifact_len: usize,
    pub threshold: usize,
    pub complete: bool,
    pub contributions: usize,
    pub votes: usize,
}

/// Shared, lock-guarded access to one [`RoundAggregator`]
///
/// All reads return owned copies; no lock guard escapes a call.
pub struct RoundSession<I: ParticipantId> {
    aggregator: Mutex<RoundAggregator<I>>,
    logger: Arc<dyn RoundEventLogger>,
}

impl<I: ParticipantId + Serialize> RoundSession<I> {
    pub fn new(artifact: Vec<String>, config: RoundConfig) -> Self {
        Self::from_aggregator(RoundAggregator::with_config(artifact, config))
    }

    pub fn from_aggregator(aggregator: RoundAggregator<I>) -> Self {
        Self {
            aggregator: Mutex::new(aggregator),
            logger: Arc::new(NoRoundLogger),
        }
    }

    /// Send round events to `logger`
    pub fn with_logger(mut self, logger: Arc<dyn RoundEventLogger>) -> Self {
        self.logger = logger;
        self
    }

    // Every aggregator method leaves its invariants intact before it can
    // panic, so the state behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, RoundAggregator<I>> {
        self.aggregator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Submit (or replace) a contribution
    pub fn submit(&self, submitter: I, text: impl Into<String>) -> Result<(), ValidationError> {
        let text = text.into();
        let chars = text.chars().count();

        let mut aggregator = self.lock();
        let round = aggregator.round_number();
        let result = aggregator.submit(submitter.clone(), text);

        match &result {
            Ok(()) => {
                debug!(round, submitter = ?submitter, chars, "Contribution accepted");
                self.logger.log(RoundEvent::new(
                    RoundEvent::CONTRIBUTION_SUBMITTED,
                    json!({ "round": round, "submitter": submitter, "chars": chars }),
                ));
            }
            Err(e) => {
                warn!(round, submitter = ?submitter, chars, "Contribution rejected: {}", e);
                self.logger.log(RoundEvent::new(
                    RoundEvent::CONTRIBUTION_REJECTED,
                    json!({
                        "round": round,
                        "submitter": submitter,
                        "chars": chars,
                        "reason": e.to_string(),
                    }),
                ));
            }
        }

        result
    }

    /// Cast a vote
    pub fn vote(&self, voter: I, target: I) -> Result<(), VoteError> {
        let mut aggregator = self.lock();
        let round = aggregator.round_number();
        let result = aggregator.vote(voter.clone(), target.clone());

        match &result {
            Ok(()) => {
                debug!(round, voter = ?voter, target = ?target, "Vote recorded");
                self.logger.log(RoundEvent::new(
                    RoundEvent::VOTE_CAST,
                    json!({ "round": round, "voter": voter, "target": target }),
                ));
            }
            Err(e) => {
                warn!(round, voter = ?voter, target = ?target, "Vote rejected: {}", e);
                self.logger.log(RoundEvent::new(
                    RoundEvent::VOTE_REJECTED,
                    json!({
                        "round": round,
                        "voter": voter,
                        "target": target,
                        "reason": e.to_string(),
                    }),
                ));
            }
        }

        result
    }

    pub fn tally(&self, target: &I) -> usize {
        self.lock().tally(target)
    }

    pub fn select_winner(&self) -> Option<String> {
        self.lock().select_winner().map(str::to_string)
    }

    pub fn select_winner_id(&self) -> Option<I> {
        self.lock().select_winner_id()
    }

    pub fn standings(&self) -> Vec<Standing<I>> {
        self.lock().standings()
    }

    /// Finalize the round; `true` if the artifact grew
    pub fn finalize_round(&self) -> bool {
        self.conclude_round().is_accepted()
    }

    /// Finalize the round and return its report
    pub fn conclude_round(&self) -> RoundReport<I> {
        let mut aggregator = self.lock();
        let report = aggregator.conclude_round();

        match &report.winner {
            Some(winner) => info!(
                round = report.round,
                winner = ?winner,
                votes_cast = report.votes_cast,
                artifact_len = report.artifact_len,
                "Round accepted"
            ),
            None => info!(
                round = report.round,
                votes_cast = report.votes_cast,
                "Round discarded: {}",
                report.outcome
            ),
        }

        match serde_json::to_value(&report) {
            Ok(payload) => self
                .logger
                .log(RoundEvent::new(RoundEvent::ROUND_FINALIZED, payload)),
            Err(e) => warn!("Could not serialize round report: {}", e),
        }

        report
    }

    pub fn contributions(&self) -> HashMap<I, String> {
        self.lock().current_contributions().clone()
    }

    pub fn votes(&self) -> HashMap<I, I> {
        self.lock().votes().clone()
    }

    pub fn artifact(&self) -> Vec<String> {
        self.lock().artifact().to_vec()
    }

    pub fn is_complete(&self) -> bool {
        self.lock().is_complete()
    }

    pub fn is_complete_at(&self, target_len: usize) -> bool {
        self.lock().is_complete_at(target_len)
    }

    pub fn completion_threshold(&self) -> usize {
        self.lock().completion_threshold()
    }

    pub fn round_number(&self) -> usize {
        self.lock().round_number()
    }

    pub fn snapshot(&self) -> RoundSnapshot<I> {
        self.lock().snapshot()
    }

    pub fn status(&self) -> SessionStatus {
        let aggregator = self.lock();
        SessionStatus {
            round: aggregator.round_number(),
            artifact_len: aggregator.artifact().len(),
            threshold: aggregator.completion_threshold(),
            complete: aggregator.is_complete(),
            contributions: aggregator.current_contributions().len(),
            votes: aggregator.votes().len(),
        }
    }
}
