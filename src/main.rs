//! Expense Summary - category totals for an expense tracker's data file
//!
//! A CLI tool that reads the JSON list of expenses written by the
//! expense tracker application and prints the total spent per category.
//!
//! Exit codes:
//!   0 - Summary printed, or the data file was missing or unusable
//!   1 - Invalid arguments or configuration

mod analysis;
mod cli;
mod config;
mod models;
mod report;
mod source;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use std::io::Write;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Expense Summary v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_summary(&config, &mut out)?;
    out.flush().context("Failed to flush standard output")?;

    Ok(())
}

/// Handle --init-config: generate a default .expense-summary.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml()?;
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so that stdout carries only the summary.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load, aggregate and print. Problems with the data file are reported
/// as part of the output rather than returned.
fn run_summary<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let path = &config.input.file;
    info!(
        "Summarising {} ({} order)",
        path.display(),
        config.report.sort
    );

    let text = match source::load_expenses(path) {
        Ok(records) => {
            let totals = analysis::aggregate(&records, &config.report.default_category);
            report::generate_summary(&totals, config.report.sort)
        }
        Err(e) => {
            warn!("{}", e);
            report::generate_load_error(&e, &config.input.producer)
        }
    };

    out.write_all(text.as_bytes()).context("Failed to write summary")?;
    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
