//! Output formatter trait and the JSON formatter

use meme_quorum_application::SessionStatus;
use meme_quorum_domain::{RoundReport, RoundSnapshot, Standing};
use serde::Serialize;
use serde_json::json;

/// Trait for formatting session results
pub trait RoundFormatter: Send + Sync {
    /// Format a finalized round
    fn report(&self, report: &RoundReport<String>) -> String;

    /// Format the open round's contributions with their votes
    fn standings(&self, standings: &[Standing<String>]) -> String;

    /// Format the accumulated artifact
    fn artifact(&self, artifact: &[String]) -> String;

    /// Format the current leader (or its absence)
    fn winner(&self, winner: Option<&str>) -> String;

    /// Format one contributor's vote count
    fn tally(&self, target: &str, votes: usize) -> String;

    fn status(&self, status: &SessionStatus) -> String;

    fn snapshot(&self, snapshot: &RoundSnapshot<String>) -> String;

    /// Confirmation of an accepted submission or vote
    fn acknowledgement(&self, message: &str) -> String;

    fn error(&self, message: &str) -> String;
}

/// Order standings by votes, then by id, so output is stable
pub fn sorted_standings(standings: &[Standing<String>]) -> Vec<&Standing<String>> {
    let mut sorted: Vec<_> = standings.iter().collect();
    sorted.sort_by(|a, b| b.votes.cmp(&a.votes).then_with(|| a.id.cmp(&b.id)));
    sorted
}

/// Formats every result as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl RoundFormatter for JsonFormatter {
    fn report(&self, report: &RoundReport<String>) -> String {
        let report = RoundReport {
            standings: sorted_standings(&report.standings)
                .into_iter()
                .cloned()
                .collect(),
            ..report.clone()
        };
        Self::render(&report)
    }

    fn standings(&self, standings: &[Standing<String>]) -> String {
        Self::render(&sorted_standings(standings))
    }

    fn artifact(&self, artifact: &[String]) -> String {
        Self::render(&json!({ "artifact": artifact }))
    }

    fn winner(&self, winner: Option<&str>) -> String {
        Self::render(&json!({ "winner": winner }))
    }

    fn tally(&self, target: &str, votes: usize) -> String {
        Self::render(&json!({ "id": target, "votes": votes }))
    }

    fn status(&self, status: &SessionStatus) -> String {
        Self::render(status)
    }

    fn snapshot(&self, snapshot: &RoundSnapshot<String>) -> String {
        Self::render(snapshot)
    }

    fn acknowledgement(&self, message: &str) -> String {
        Self::render(&json!({ "ok": message }))
    }

    fn error(&self, message: &str) -> String {
        Self::render(&json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meme_quorum_domain::RoundOutcome;

    fn standing(id: &str, votes: usize) -> Standing<String> {
        Standing {
            id: id.to_string(),
            text: format!("{} text", id),
            votes,
        }
    }

    #[test]
    fn test_sorted_standings_breaks_ties_by_id() {
        let standings = vec![standing("carol", 1), standing("bob", 2), standing("alice", 1)];
        let ids: Vec<&str> = sorted_standings(&standings)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn test_json_report() {
        let report = RoundReport {
            round: 2,
            outcome: RoundOutcome::Accepted,
            winner: Some("bob".to_string()),
            accepted_text: Some("bob text".to_string()),
            standings: vec![
                standing("carol", 0),
                standing("alice", 0),
                standing("bob", 1),
            ],
            votes_cast: 1,
            artifact_len: 1,
        };

        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.report(&report)).unwrap();
        assert_eq!(value["round"], 2);
        assert_eq!(value["outcome"], "accepted");
        assert_eq!(value["standings"][0]["id"], "bob");
        assert_eq!(value["standings"][1]["id"], "alice");
        assert_eq!(value["standings"][2]["id"], "carol");
    }

    #[test]
    fn test_json_winner_and_errors() {
        let none: serde_json::Value = serde_json::from_str(&JsonFormatter.winner(None)).unwrap();
        assert!(none["winner"].is_null());

        let err: serde_json::Value =
            serde_json::from_str(&JsonFormatter.error("You have already voted")).unwrap();
        assert_eq!(err["error"], "You have already voted");
    }
}
