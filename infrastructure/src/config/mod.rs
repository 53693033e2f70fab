//! Configuration file loading for meme-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `MEME_QUORUM_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./meme-quorum.toml` or `./.meme-quorum.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/meme-quorum/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig, FileRoundConfig,
};
pub use loader::ConfigLoader;
