//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

use meme_quorum_domain::{CompletionPolicy, ContributionLimits, RoundConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("round.completion_threshold cannot be 0")]
    ZeroCompletionThreshold,

    #[error("round.min_chars cannot be 0")]
    ZeroMinChars,

    #[error("round.min_chars ({min}) is greater than round.max_chars ({max})")]
    InvertedLengthBounds { min: usize, max: usize },
}

/// Raw round configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoundConfig {
    /// Accepted contributions needed for a complete artifact
    pub completion_threshold: usize,
    /// Shortest accepted contribution, in characters
    pub min_chars: usize,
    /// Longest accepted contribution, in characters
    pub max_chars: usize,
}

impl Default for FileRoundConfig {
    fn default() -> Self {
        Self {
            completion_threshold: CompletionPolicy::DEFAULT_THRESHOLD,
            min_chars: ContributionLimits::DEFAULT_MIN_CHARS,
            max_chars: ContributionLimits::DEFAULT_MAX_CHARS,
        }
    }
}

impl FileRoundConfig {
    /// Convert into the domain configuration
    pub fn to_round_config(&self) -> RoundConfig {
        RoundConfig::default()
            .with_limits(ContributionLimits::new(self.min_chars, self.max_chars))
            .with_completion_threshold(self.completion_threshold)
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving round events
    pub event_log: Option<PathBuf>,
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Round rules
    pub round: FileRoundConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Event log settings
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let round = &self.round;

        if round.completion_threshold == 0 {
            return Err(ConfigValidationError::ZeroCompletionThreshold);
        }

        if round.min_chars == 0 {
            return Err(ConfigValidationError::ZeroMinChars);
        }

        if round.min_chars > round.max_chars {
            return Err(ConfigValidationError::InvertedLengthBounds {
                min: round.min_chars,
                max: round.max_chars,
            });
        }

        Ok(())
    }
}
