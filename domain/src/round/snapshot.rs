//! Serializable round state

use crate::core::identity::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The minimal state needed to rebuild an aggregator
///
/// Produced by [`RoundAggregator::snapshot`](super::RoundAggregator::snapshot)
/// and consumed by [`RoundAggregator::restore`](super::RoundAggregator::restore),
/// which re-checks every contribution and vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot<I: ParticipantId> {
    pub artifact: Vec<String>,
    #[serde(default)]
    pub contributions: HashMap<I, String>,
    #[serde(default)]
    pub votes: HashMap<I, I>,
}

impl<I: ParticipantId> RoundSnapshot<I> {
    /// Snapshot of an artifact with no round in progress
    pub fn from_artifact(artifact: Vec<String>) -> Self {
        Self {
            artifact,
            contributions: HashMap::new(),
            votes: HashMap::new(),
        }
    }

    /// Check if a round is in progress
    pub fn has_open_round(&self) -> bool {
        !self.contributions.is_empty() || !self.votes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let snapshot = RoundSnapshot {
            artifact: vec!["top text".to_string()],
            contributions: HashMap::from([(1u32, "bottom text".to_string())]),
            votes: HashMap::from([(2u32, 1u32)]),
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["artifact"][0], "top text");
        assert_eq!(value["contributions"]["1"], "bottom text");
        assert_eq!(value["votes"]["2"], 1);

        let back: RoundSnapshot<u32> = serde_json::from_value(value).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_missing_round_sets_default_to_empty() {
        let snapshot: RoundSnapshot<String> =
            serde_json::from_str(r#"{"artifact":["a meme"]}"#).unwrap();
        assert_eq!(snapshot.artifact, vec!["a meme".to_string()]);
        assert!(!snapshot.has_open_round());
    }

    #[test]
    fn test_from_artifact() {
        let snapshot: RoundSnapshot<u32> = RoundSnapshot::from_artifact(vec!["x".into()]);
        assert_eq!(snapshot.artifact.len(), 1);
        assert!(!snapshot.has_open_round());
    }
}
