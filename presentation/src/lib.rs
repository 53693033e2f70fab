//! Presentation layer for meme-quorum
//!
//! This crate contains CLI definitions, output formatters and the
//! interactive / scripted round session.

pub mod cli;
pub mod output;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, RoundFormatter};
pub use session::command::{ParseCommandError, SessionCommand};
pub use session::repl::{RoundRepl, ScriptError, ScriptSummary, Step};
