//! REPL (Read-Eval-Print Loop) and script runner for round sessions

use crate::output::formatter::RoundFormatter;
use crate::session::command::{HELP, SessionCommand};
use meme_quorum_application::{RoundSession, SessionStatus};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Result of executing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Blank line or comment
    Skip,
    /// Command succeeded; print the rendered output
    Output(String),
    /// Command was rejected
    Failed { rendered: String, message: String },
    /// Session ends after printing the rendered output
    Quit(String),
}

/// Errors that end a scripted session
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    CommandFailed { line: usize, message: String },
}

/// Counts from a completed script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands executed (blank lines and comments excluded)
    pub executed: usize,
    /// Commands that were rejected
    pub failed: usize,
}

/// Interactive and scripted front end for one [`RoundSession`]
pub struct RoundRepl {
    session: Arc<RoundSession<String>>,
    formatter: Box<dyn RoundFormatter>,
    history_file: Option<PathBuf>,
    stop_when_complete: bool,
}

impl RoundRepl {
    pub fn new(session: Arc<RoundSession<String>>, formatter: Box<dyn RoundFormatter>) -> Self {
        Self {
            session,
            formatter,
            history_file: None,
            stop_when_complete: false,
        }
    }

    /// Persist prompt history to this file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// End the session as soon as the artifact is complete
    pub fn with_stop_when_complete(mut self, stop: bool) -> Self {
        self.stop_when_complete = stop;
        self
    }

    /// Run the interactive REPL
    pub fn run_interactive(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = &self.history_file {
            if let Some(parent) = path.parent()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                warn!("Could not create history directory {}: {}", parent.display(), e);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("meme-quorum".to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => match self.execute_line(&line) {
                    Step::Skip => {}
                    Step::Output(text) => println!("{}", text),
                    Step::Failed { rendered, .. } => eprintln!("{}", rendered),
                    Step::Quit(text) => {
                        println!("{}", text);
                        break;
                    }
                },
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                // Ctrl-C only clears the current line
                _ => continue,
            }
        }

        Ok(())
    }

    /// Run commands from `reader`, writing every result to `out`.
    ///
    /// Rejected commands are reported and skipped, unless `strict` is set,
    /// in which case the first rejection ends the script with an error.
    pub fn run_script<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: &mut W,
        strict: bool,
    ) -> Result<ScriptSummary, ScriptError> {
        let mut summary = ScriptSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match self.execute_line(&line) {
                Step::Skip => {}
                Step::Output(text) => {
                    summary.executed += 1;
                    writeln!(out, "{}", text)?;
                }
                Step::Failed { rendered, message } => {
                    summary.executed += 1;
                    summary.failed += 1;
                    writeln!(out, "{}", rendered)?;
                    if strict {
                        return Err(ScriptError::CommandFailed {
                            line: index + 1,
                            message,
                        });
                    }
                }
                Step::Quit(text) => {
                    summary.executed += 1;
                    writeln!(out, "{}", text)?;
                    break;
                }
            }
        }

        Ok(summary)
    }

    /// Parse and execute one input line
    pub fn execute_line(&self, line: &str) -> Step {
        match SessionCommand::parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Step::Skip,
            Err(e) => self.failed(e.to_string()),
        }
    }

    /// Execute one parsed command
    pub fn execute(&self, command: SessionCommand) -> Step {
        debug!(?command, "Executing session command");
        let fmt = &self.formatter;

        match command {
            SessionCommand::Submit { submitter, text } => {
                let chars = text.chars().count();
                match self.session.submit(submitter.clone(), text) {
                    Ok(()) => Step::Output(fmt.acknowledgement(&format!(
                        "{} submitted a line ({} chars)",
                        submitter, chars
                    ))),
                    Err(e) => self.failed(e.to_string()),
                }
            }
            SessionCommand::Vote { voter, target } => {
                match self.session.vote(voter.clone(), target.clone()) {
                    Ok(()) => Step::Output(
                        fmt.acknowledgement(&format!("{} voted for {}", voter, target)),
                    ),
                    Err(e) => self.failed(e.to_string()),
                }
            }
            SessionCommand::Tally { target } => {
                let votes = self.session.tally(&target);
                Step::Output(fmt.tally(&target, votes))
            }
            SessionCommand::Winner => {
                Step::Output(fmt.winner(self.session.select_winner().as_deref()))
            }
            SessionCommand::Finalize => {
                let report = self.session.conclude_round();
                let rendered = fmt.report(&report);
                if self.stop_when_complete && self.session.is_complete() {
                    let artifact = fmt.artifact(&self.session.artifact());
                    Step::Quit(format!("{}\n{}", rendered, artifact))
                } else {
                    Step::Output(rendered)
                }
            }
            SessionCommand::Contributions => Step::Output(fmt.standings(&self.session.standings())),
            SessionCommand::Artifact => Step::Output(fmt.artifact(&self.session.artifact())),
            SessionCommand::Status => Step::Output(fmt.status(&self.status())),
            SessionCommand::Snapshot => Step::Output(fmt.snapshot(&self.session.snapshot())),
            SessionCommand::Help => Step::Output(HELP.to_string()),
            SessionCommand::Quit => Step::Quit("Bye!".to_string()),
        }
    }

    /// Current progress of the session
    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    fn failed(&self, message: String) -> Step {
        Step::Failed {
            rendered: self.formatter.error(&message),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::formatter::JsonFormatter;
    use meme_quorum_domain::RoundConfig;
    use std::io::Cursor;

    fn repl(artifact: Vec<String>) -> RoundRepl {
        let session = Arc::new(RoundSession::new(artifact, RoundConfig::default()));
        RoundRepl::new(session, Box::new(JsonFormatter))
    }

    fn json(step: Step) -> serde_json::Value {
        match step {
            Step::Output(text) | Step::Quit(text) => serde_json::from_str(&text).unwrap(),
            Step::Failed { rendered, .. } => serde_json::from_str(&rendered).unwrap(),
            Step::Skip => panic!("expected output"),
        }
    }

    #[test]
    fn test_clear_winner_round() {
        let repl = repl(Vec::new());
        repl.execute_line("submit 1 AI generated memes be like:");
        repl.execute_line("submit 2 Human generated memes be like:");
        repl.execute_line("vote 1 2");
        repl.execute_line("vote 3 2");

        let winner = json(repl.execute_line("winner"));
        assert_eq!(winner["winner"], "Human generated memes be like:");

        let report = json(repl.execute_line("finalize"));
        assert_eq!(report["outcome"], "accepted");
        assert_eq!(report["winner"], "2");

        let artifact = json(repl.execute_line("artifact"));
        assert_eq!(artifact["artifact"][0], "Human generated memes be like:");
        assert_eq!(repl.status().contributions, 0);
        assert_eq!(repl.status().votes, 0);
    }

    #[test]
    fn test_rejections_are_reported() {
        let repl = repl(Vec::new());
        assert_eq!(
            repl.execute_line("submit 1  "),
            Step::Failed {
                rendered: JsonFormatter.error("Text cannot be empty"),
                message: "Text cannot be empty".to_string(),
            }
        );

        repl.execute_line("submit 1 AI generated memes be like:");
        let err = json(repl.execute_line("vote 1 1"));
        assert_eq!(err["error"], "You cannot vote for yourself");

        let err = json(repl.execute_line("vote 2 9"));
        assert_eq!(err["error"], "The user you are voting for does not exist");

        let err = json(repl.execute_line("jump"));
        assert!(err["error"].as_str().unwrap().contains("Unknown command"));
    }

    #[test]
    fn test_tally_and_status() {
        let repl = repl(vec!["Nobody:".to_string()]);
        repl.execute_line("submit bob Me at 3am:");
        repl.execute_line("vote alice bob");

        let tally = json(repl.execute_line("tally bob"));
        assert_eq!(tally["votes"], 1);

        let status = json(repl.execute_line("status"));
        assert_eq!(status["round"], 1);
        assert_eq!(status["artifact_len"], 1);
        assert_eq!(status["threshold"], 3);
        assert_eq!(status["complete"], false);
    }

    #[test]
    fn test_script_runs_to_completion() {
        let script = "\
# three lone rounds make a meme
submit 1 top text here
finalize
submit 1 middle text here
finalize

submit 1 bottom text here
finalize
artifact
";
        let repl = repl(Vec::new());
        let mut out = Vec::new();
        let summary = repl.run_script(Cursor::new(script), &mut out, true).unwrap();

        assert_eq!(summary.executed, 7);
        assert_eq!(summary.failed, 0);
        assert!(repl.status().complete);
        assert!(String::from_utf8(out).unwrap().contains("bottom text here"));
    }

    #[test]
    fn test_script_continues_past_errors_unless_strict() {
        let script = "submit 1 ok line\nvote 1 1\nfinalize\n";

        let lenient = repl(Vec::new());
        let summary = lenient
            .run_script(Cursor::new(script), &mut Vec::new(), false)
            .unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(lenient.status().artifact_len, 1);

        let strict = repl(Vec::new());
        let err = strict
            .run_script(Cursor::new(script), &mut Vec::new(), true)
            .unwrap_err();
        match err {
            ScriptError::CommandFailed { line, message } => {
                assert_eq!(line, 2);
                assert_eq!(message, "You cannot vote for yourself");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(strict.status().artifact_len, 0);
    }

    #[test]
    fn test_quit_and_stop_when_complete() {
        let repl = repl(vec!["one".to_string(), "two".to_string()])
            .with_stop_when_complete(true);
        let script = "submit a three\nfinalize\nsubmit a never reached\n";
        let summary = repl
            .run_script(Cursor::new(script), &mut Vec::new(), true)
            .unwrap();
        assert_eq!(summary.executed, 2);
        assert_eq!(repl.status().contributions, 0);

        let repl = self::repl(Vec::new());
        assert_eq!(repl.execute_line("quit"), Step::Quit("Bye!".to_string()));
    }
}
