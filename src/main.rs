//! Bloom Sweep - Main entrypoint.
//!
//! Loads configuration, initializes logging, runs the size sweep on a
//! multi-threaded runtime and prints one JSON record per size to stdout.

use bloom_sweep_lib::config::{self, ConfigLoader, ExperimentConfig, LogConfig};
use bloom_sweep_lib::error::{
    report_error, set_error_reporter, ErrorContext, SweepError, SweepResult, TracingErrorReporter,
};
use bloom_sweep_lib::experiment;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Bloom Sweep.
#[derive(Parser, Debug)]
#[clap(name = "Bloom Sweep", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the size sweep and print the report
    Run,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so stdout carries only the report.
fn init_logging(log: &LogConfig) -> SweepResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SweepError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Build the runtime and run the sweep.
fn run(config: &ExperimentConfig) -> SweepResult<()> {
    let runtime = experiment::build_runtime(&config.sweep)?;

    info!(
        worker_threads = config.sweep.worker_threads,
        hash_functions = config.filter.hash_functions,
        total_keys = config.dataset.total_keys,
        "Starting Bloom sweep"
    );

    let report = runtime.block_on(experiment::run(config))?;
    report.write_to(std::io::stdout().lock())
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    let (component, outcome) = match args.command.unwrap_or(Command::Run) {
        Command::Run => ("sweep", start(&loader).and_then(|config| run(&config))),
        Command::Validate => (
            "config",
            start(&loader).map(|config| {
                info!(sizes = ?config.sweep.sizes(), "Configuration validated successfully");
            }),
        ),
        Command::GenConfig { output } => ("gen-config", gen_config(&output)),
    };

    if let Err(e) = outcome {
        // Falls back to stderr when logging never came up
        report_error(&ErrorContext::new(e, component));
        process::exit(1);
    }
}

/// Load and validate configuration, then bring up logging and error reporting.
fn start(loader: &ConfigLoader) -> SweepResult<ExperimentConfig> {
    let config = loader.load()?;
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    Ok(config)
}

/// Write the default configuration as TOML.
fn gen_config(output: &Path) -> SweepResult<()> {
    let default_config = ExperimentConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| SweepError::Custom(format!("Failed to serialize config: {e}")))?;

    std::fs::write(output, toml)?;

    eprintln!("Default configuration written to {output:?}");
    Ok(())
}
