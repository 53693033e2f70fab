//! Session command parsing

use thiserror::Error;

/// Errors from parsing a session line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Unknown command: {0} (type 'help' for available commands)")]
    UnknownCommand(String),

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' takes no further arguments")]
    UnexpectedArgument(&'static str),
}

/// A single session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Submit { submitter: String, text: String },
    Vote { voter: String, target: String },
    Tally { target: String },
    Winner,
    Finalize,
    Contributions,
    Artifact,
    Status,
    Snapshot,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line.
    ///
    /// Blank lines and `#` comments yield `Ok(None)`. For `submit`, the
    /// text is everything after the single separator following the id,
    /// kept verbatim so the length rules see exactly what was typed.
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseCommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = split_word(trimmed);
        let command = match keyword.to_lowercase().as_str() {
            "submit" | "s" => {
                let (submitter, text) = split_word(rest.trim_start());
                if submitter.is_empty() {
                    return Err(missing("submit", "submitter id"));
                }
                SessionCommand::Submit {
                    submitter: submitter.to_string(),
                    text: text.to_string(),
                }
            }
            "vote" | "v" => {
                let mut args = rest.split_whitespace();
                let voter = args.next().ok_or(missing("vote", "voter id"))?;
                let target = args.next().ok_or(missing("vote", "target id"))?;
                if args.next().is_some() {
                    return Err(ParseCommandError::UnexpectedArgument("vote"));
                }
                SessionCommand::Vote {
                    voter: voter.to_string(),
                    target: target.to_string(),
                }
            }
            "tally" | "t" => {
                let mut args = rest.split_whitespace();
                let target = args.next().ok_or(missing("tally", "target id"))?;
                if args.next().is_some() {
                    return Err(ParseCommandError::UnexpectedArgument("tally"));
                }
                SessionCommand::Tally {
                    target: target.to_string(),
                }
            }
            "winner" => no_args("winner", rest, SessionCommand::Winner)?,
            "finalize" | "f" => no_args("finalize", rest, SessionCommand::Finalize)?,
            "show" | "contributions" => no_args("show", rest, SessionCommand::Contributions)?,
            "artifact" | "meme" => no_args("artifact", rest, SessionCommand::Artifact)?,
            "status" => no_args("status", rest, SessionCommand::Status)?,
            "snapshot" => no_args("snapshot", rest, SessionCommand::Snapshot)?,
            "help" | "h" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(ParseCommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word; the rest loses only the
/// one separator character.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    }
}

fn missing(command: &'static str, argument: &'static str) -> ParseCommandError {
    ParseCommandError::MissingArgument { command, argument }
}

fn no_args(
    command: &'static str,
    rest: &str,
    parsed: SessionCommand,
) -> Result<SessionCommand, ParseCommandError> {
    if rest.trim().is_empty() {
        Ok(parsed)
    } else {
        Err(ParseCommandError::UnexpectedArgument(command))
    }
}

/// Help text listing every session command
pub const HELP: &str = "\
Commands:
  submit <id> <text>      Submit (or replace) your line for this round
  vote <voter> <target>   Vote for someone else's line, once per round
  tally <id>              Votes received by <id>
  winner                  Current leader, if there is a unique one
  finalize                Close the round; the winner joins the meme
  show                    Lines submitted this round with their votes
  artifact                The meme so far
  status                  Round number and completion progress
  snapshot                Current state as JSON
  help                    Show this help
  quit                    Leave the session";
