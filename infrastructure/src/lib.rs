//! Infrastructure layer for meme-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, FileRoundConfig,
};
pub use logging::JsonlRoundLogger;
