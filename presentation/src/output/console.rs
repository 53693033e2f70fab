//! Console output formatter for round results

use crate::output::formatter::{RoundFormatter, sorted_standings};
use meme_quorum_application::SessionStatus;
use colored::Colorize;
use meme_quorum_domain::{RoundReport, RoundSnapshot, Standing};

/// Formats round results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Welcome banner for interactive sessions
    pub fn banner(threshold: usize) -> String {
        let mut output = Self::header("meme-quorum");
        output.push_str(&format!(
            "\n{} {} accepted lines make a meme\n",
            "Goal:".cyan().bold(),
            threshold
        ));
        output.push_str(&format!("{}\n", "Type 'help' for commands.".dimmed()));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn standing_line(standing: &Standing<String>) -> String {
        let votes = match standing.votes {
            1 => "1 vote".to_string(),
            n => format!("{} votes", n),
        };
        format!(
            "  {:<12} {:>8}  {}",
            standing.id.yellow(),
            votes,
            standing.text
        )
    }
}

impl RoundFormatter for ConsoleFormatter {
    fn report(&self, report: &RoundReport<String>) -> String {
        let mut output = Self::section_header(&format!("Round {}", report.round));

        let outcome = report.outcome.to_string();
        let outcome = if report.is_accepted() {
            outcome.green().bold()
        } else {
            outcome.red().bold()
        };
        output.push_str(&format!(
            "{} {} {}\n",
            "Outcome:".bold(),
            outcome,
            report.vote_summary().dimmed()
        ));

        if let (Some(winner), Some(text)) = (&report.winner, &report.accepted_text) {
            output.push_str(&format!(
                "{} {} ({})\n",
                "Added:".bold(),
                text,
                winner.yellow()
            ));
        }

        for standing in sorted_standings(&report.standings) {
            output.push_str(&Self::standing_line(standing));
            output.push('\n');
        }

        output.push_str(&format!(
            "{} {} lines\n",
            "Meme length:".dimmed(),
            report.artifact_len
        ));
        output
    }

    fn standings(&self, standings: &[Standing<String>]) -> String {
        if standings.is_empty() {
            return "No contributions this round.".dimmed().to_string();
        }

        let mut output = Self::section_header("This round");
        let lines: Vec<String> = sorted_standings(standings)
            .into_iter()
            .map(Self::standing_line)
            .collect();
        output.push_str(&lines.join("\n"));
        output
    }

    fn artifact(&self, artifact: &[String]) -> String {
        if artifact.is_empty() {
            return "The meme is still empty.".dimmed().to_string();
        }

        let mut output = Self::section_header("The meme so far");
        let lines: Vec<String> = artifact
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{:>3}. {}", i + 1, line))
            .collect();
        output.push_str(&lines.join("\n"));
        output
    }

    fn winner(&self, winner: Option<&str>) -> String {
        match winner {
            Some(text) => format!("{} {}", "Leading:".green().bold(), text),
            None => "No winner (tie or no contributions)".yellow().to_string(),
        }
    }

    fn tally(&self, target: &str, votes: usize) -> String {
        format!("{}: {}", target.yellow(), votes)
    }

    fn status(&self, status: &SessionStatus) -> String {
        let progress = format!("{}/{}", status.artifact_len, status.threshold);
        let progress = if status.complete {
            format!("{} (complete)", progress).green().bold().to_string()
        } else {
            progress
        };
        format!(
            "{} {}\n{} {}\n{} {} submitted, {} voted",
            "Round:".bold(),
            status.round,
            "Meme:".bold(),
            progress,
            "Open round:".bold(),
            status.contributions,
            status.votes
        )
    }

    fn snapshot(&self, snapshot: &RoundSnapshot<String>) -> String {
        serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    fn acknowledgement(&self, message: &str) -> String {
        format!("{} {}", "✓".green(), message)
    }

    fn error(&self, message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meme_quorum_domain::{DiscardReason, RoundOutcome};

    fn plain() -> ConsoleFormatter {
        colored::control::set_override(false);
        ConsoleFormatter
    }

    fn standing(id: &str, text: &str, votes: usize) -> Standing<String> {
        Standing {
            id: id.to_string(),
            text: text.to_string(),
            votes,
        }
    }

    #[test]
    fn test_format_accepted_report() {
        let report = RoundReport {
            round: 1,
            outcome: RoundOutcome::Accepted,
            winner: Some("bob".to_string()),
            accepted_text: Some("Human generated memes be like:".to_string()),
            standings: vec![
                standing("alice", "AI generated memes be like:", 0),
                standing("bob", "Human generated memes be like:", 2),
            ],
            votes_cast: 2,
            artifact_len: 1,
        };

        let output = plain().report(&report);
        assert!(output.contains("Round 1"));
        assert!(output.contains("Accepted"));
        assert!(output.contains("Added: Human generated memes be like: (bob)"));
        assert!(output.contains("2 votes"));
        let bob = output.find("bob").unwrap();
        let alice = output.find("alice").unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn test_format_discarded_report() {
        let report = RoundReport {
            round: 3,
            outcome: RoundOutcome::Discarded(DiscardReason::Tie),
            winner: None,
            accepted_text: None,
            standings: vec![standing("a", "one", 1), standing("b", "two", 1)],
            votes_cast: 2,
            artifact_len: 0,
        };

        let output = plain().report(&report);
        assert!(output.contains("Discarded (tie)"));
        assert!(!output.contains("Added:"));
    }

    #[test]
    fn test_format_artifact_numbers_lines() {
        let output = plain().artifact(&["Nobody:".to_string(), "Me:".to_string()]);
        assert!(output.contains("  1. Nobody:"));
        assert!(output.contains("  2. Me:"));
        assert_eq!(plain().artifact(&[]), "The meme is still empty.");
    }

    #[test]
    fn test_format_winner() {
        assert_eq!(plain().winner(Some("Me:")), "Leading: Me:");
        assert_eq!(plain().winner(None), "No winner (tie or no contributions)");
    }

    #[test]
    fn test_format_status() {
        let status = SessionStatus {
            round: 4,
            artifact_len: 3,
            threshold: 3,
            complete: true,
            contributions: 0,
            votes: 0,
        };
        let output = plain().status(&status);
        assert!(output.contains("Round: 4"));
        assert!(output.contains("3/3 (complete)"));
    }
}
