//! Line-oriented round session
//!
//! One command per line, either typed at the prompt or read from a script.

pub mod command;
pub mod repl;
