//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for meme-quorum
#[derive(Parser, Debug)]
#[command(name = "meme-quorum")]
#[command(author, version, about = "Build a meme one voted line at a time")]
#[command(long_about = r#"
meme-quorum runs rounds of collaborative writing.

Each round:
1. Submit: every participant submits one line (3-200 characters)
2. Vote: participants vote for someone else's line, once per round
3. Finalize: the line with strictly the most votes joins the meme;
   a tie discards the round

Session commands (one per line):
  submit <id> <text>    vote <voter> <target>    tally <id>
  winner    finalize    show    artifact    status    snapshot    help    quit

Configuration files are loaded from (in priority order):
1. MEME_QUORUM_* environment variables
2. --config <path>     Explicit config file
3. ./meme-quorum.toml  Project-level config
4. ~/.config/meme-quorum/config.toml   Global config
With --no-config only --config (if given) is read.

Example:
  meme-quorum
  meme-quorum --threshold 4 --seed "Nobody:" --event-log rounds.jsonl
  meme-quorum --script round.txt --strict -o json
"#)]
pub struct Cli {
    /// Run commands from a file instead of the interactive prompt ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Stop a script at the first failing command (non-zero exit)
    #[arg(long)]
    pub strict: bool,

    /// End the session once the meme is complete
    #[arg(long)]
    pub stop_when_complete: bool,

    /// Accepted lines needed for a complete meme
    #[arg(short, long, value_name = "N")]
    pub threshold: Option<usize>,

    /// Initial meme lines (can be specified multiple times)
    #[arg(long, value_name = "TEXT")]
    pub seed: Vec<String>,

    /// Append round events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore discovered configuration files and environment variables
    /// (an explicit --config is still read)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
