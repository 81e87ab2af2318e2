//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.expense-summary.toml` files.

use crate::models::{CategoryOrder, DEFAULT_CATEGORY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the current directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = ".expense-summary.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where the expenses come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Expenses data file, relative to the current directory.
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Application that writes the data file.
    #[serde(default = "default_producer")]
    pub producer: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            producer: default_producer(),
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from("expenses.txt")
}

fn default_producer() -> String {
    "Java".to_string()
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Order of the category lines.
    #[serde(default)]
    pub sort: CategoryOrder,

    /// Label for records without a category.
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort: CategoryOrder::default(),
            default_category: default_category(),
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence, but only when given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref file) = args.file {
            self.input.file = file.clone();
        }
        if let Some(ref producer) = args.producer {
            self.input.producer = producer.clone();
        }
        if let Some(sort) = args.sort {
            self.report.sort = sort;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")
    }
}
