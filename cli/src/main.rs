//! CLI entrypoint for meme-quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use meme_quorum_application::RoundSession;
use meme_quorum_infrastructure::{ConfigLoader, FileConfig, FileOutputFormat, JsonlRoundLogger};
use meme_quorum_presentation::{
    Cli, ConsoleFormatter, JsonFormatter, OutputFormat, RoundFormatter, RoundRepl,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting meme-quorum");

    let mut config = load_config(&cli)?;
    apply_cli_overrides(&cli, &mut config);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let mut session = RoundSession::new(cli.seed.clone(), config.round.to_round_config());
    if let Some(path) = &config.logging.event_log {
        match JsonlRoundLogger::new(path) {
            Some(logger) => {
                info!("Writing round events to {}", logger.path().display());
                session = session.with_logger(Arc::new(logger));
            }
            None => warn!("Round events will not be logged"),
        }
    }
    let session = Arc::new(session);

    let formatter: Box<dyn RoundFormatter> = match config.output.format.unwrap_or_default() {
        FileOutputFormat::Text => Box::new(ConsoleFormatter),
        FileOutputFormat::Json => Box::new(JsonFormatter),
    };

    let repl = RoundRepl::new(session.clone(), formatter)
        .with_history_file(history_file(&config))
        .with_stop_when_complete(cli.stop_when_complete);

    if let Some(script) = &cli.script {
        let mut stdout = io::stdout().lock();
        let summary = if script.as_os_str() == "-" {
            repl.run_script(io::stdin().lock(), &mut stdout, cli.strict)?
        } else {
            let file = File::open(script)
                .with_context(|| format!("Could not open script {}", script.display()))?;
            repl.run_script(BufReader::new(file), &mut stdout, cli.strict)?
        };
        info!(
            executed = summary.executed,
            failed = summary.failed,
            complete = session.is_complete(),
            "Script finished"
        );
        return Ok(());
    }

    if !cli.quiet && config.output.format != Some(FileOutputFormat::Json) {
        println!("{}", ConsoleFormatter::banner(session.completion_threshold()));
    }

    repl.run_interactive()?;
    Ok(())
}

/// Initialize logging based on verbosity level, optionally into a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("--log-file {} does not name a file", path.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Resolve the configuration sources selected on the command line
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let loaded = match (&cli.config, cli.no_config) {
        (Some(path), true) => ConfigLoader::load_file(path),
        (None, true) => Ok(ConfigLoader::load_defaults()),
        (path, false) => ConfigLoader::load(path.as_ref()),
    };
    loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(threshold) = cli.threshold {
        config.round.completion_threshold = threshold;
    }
    if let Some(output) = cli.output {
        config.output.format = Some(match output {
            OutputFormat::Text => FileOutputFormat::Text,
            OutputFormat::Json => FileOutputFormat::Json,
        });
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(path) = &cli.event_log {
        config.logging.event_log = Some(path.clone());
    }
}

fn history_file(config: &FileConfig) -> Option<PathBuf> {
    config
        .repl
        .history_file
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("meme-quorum").join("history.txt")))
}
