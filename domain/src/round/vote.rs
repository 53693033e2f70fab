//! Vote counting for a round
//!
//! The tally is computed from the contribution set and the vote set alone,
//! so the result never depends on the order in which votes were cast or on
//! hash-map iteration order.

use crate::core::identity::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Count the votes cast for `target`.
///
/// Does not check that `target` has a contribution; unknown ids simply
/// count zero.
pub fn count_votes_for<I: ParticipantId>(votes: &HashMap<I, I>, target: &I) -> usize {
    votes.values().filter(|voted_for| *voted_for == target).count()
}

/// Vote counts for every contributor of a round
///
/// # Example
///
/// ```
/// use meme_quorum_domain::round::VoteTally;
/// use std::collections::HashMap;
///
/// let contributions = HashMap::from([(1, "first".to_string()), (2, "second".to_string())]);
/// let votes = HashMap::from([(1, 2), (3, 2)]);
///
/// let tally = VoteTally::from_round(&contributions, &votes);
/// assert_eq!(tally.count(&2), 2);
/// assert_eq!(tally.winner(), Some(&2));
/// ```
#[derive(Debug, Clone)]
pub struct VoteTally<I: ParticipantId> {
    counts: HashMap<I, usize>,
}

impl<I: ParticipantId> VoteTally<I> {
    /// Tally `votes` for every key of `contributions`.
    ///
    /// Contributors without votes are present with a zero count; votes for
    /// ids without a contribution are ignored.
    pub fn from_round(contributions: &HashMap<I, String>, votes: &HashMap<I, I>) -> Self {
        let mut counts: HashMap<I, usize> =
            contributions.keys().map(|id| (id.clone(), 0)).collect();

        for target in votes.values() {
            if let Some(count) = counts.get_mut(target) {
                *count += 1;
            }
        }

        Self { counts }
    }

    /// Votes received by `id` (0 if not a contributor)
    pub fn count(&self, id: &I) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Highest vote count, `None` when nobody contributed
    pub fn max(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Every contributor holding the highest count
    pub fn leaders(&self) -> Vec<&I> {
        let Some(max) = self.max() else {
            return Vec::new();
        };
        self.counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(id, _)| id)
            .collect()
    }

    /// The unique leader, if there is exactly one.
    ///
    /// A lone contributor leads with any count, zero included. Two or more
    /// contributors sharing the maximum is a tie and yields `None`.
    pub fn winner(&self) -> Option<&I> {
        match self.leaders().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Check if two or more contributors share the highest count
    pub fn is_tie(&self) -> bool {
        self.leaders().len() > 1
    }

    /// Number of contributors tallied
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total votes that landed on a contributor
    pub fn total_votes(&self) -> usize {
        self.counts.values().sum()
    }
}

/// One contributor's position in the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing<I> {
    pub id: I,
    pub text: String,
    pub votes: usize,
}

impl<I: ParticipantId> Standing<I> {
    /// Build standings for every contributor, most votes first.
    ///
    /// Contributors with equal counts come out in unspecified order.
    pub fn collect(contributions: &HashMap<I, String>, tally: &VoteTally<I>) -> Vec<Self> {
        let mut standings: Vec<Self> = contributions
            .iter()
            .map(|(id, text)| Standing {
                id: id.clone(),
                text: text.clone(),
                votes: tally.count(id),
            })
            .collect();
        standings.sort_by(|a, b| b.votes.cmp(&a.votes));
        standings
    }
}
