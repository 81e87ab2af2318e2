//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation. Every flag is optional: a bare invocation
//! summarises `expenses.txt` in the current directory.

use crate::models::CategoryOrder;
use clap::Parser;
use std::path::PathBuf;

/// Expense Summary - totals per category from an expense tracker's data file
///
/// Reads the JSON list of expenses written by the expense tracker
/// application and prints how much was spent in each category.
///
/// Examples:
///   expense-summary
///   expense-summary --file ~/finance/expenses.txt
///   expense-summary --sort alphabetical
///   expense-summary --init-config
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Expenses data file to summarise
    ///
    /// Defaults to the config file setting, or `expenses.txt` in the
    /// current directory.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .expense-summary.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Order in which categories are listed
    #[arg(long, value_name = "ORDER")]
    pub sort: Option<CategoryOrder>,

    /// Name of the application that writes the expenses file
    ///
    /// Only used in the hint printed when the file is missing.
    #[arg(long, value_name = "NAME")]
    pub producer: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .expense-summary.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref file) = self.file {
            if file.as_os_str().is_empty() {
                return Err("Expenses file path must not be empty".to_string());
            }
        }

        if let Some(ref producer) = self.producer {
            if producer.trim().is_empty() {
                return Err("Producer name must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
