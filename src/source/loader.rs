//! Loading the expenses data file.
//!
//! The file is written by the expense tracker application; this module only
//! reads it and checks that the top level is a list.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Failures that end a run before aggregation starts.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing exists at the input path.
    #[error("no expenses file at {}", .path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but the top level is not an array.
    #[error("{} does not contain a list of expenses", .path.display())]
    NotAList { path: PathBuf },
}

impl LoadError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Missing { path }
            | LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::NotAList { path } => path,
        }
    }
}

/// Read and parse the expenses file, returning its raw records.
pub fn load_expenses(path: &Path) -> Result<Vec<Value>, LoadError> {
    if !path.exists() {
        info!("Expenses file not found: {}", path.display());
        return Err(LoadError::Missing {
            path: path.to_path_buf(),
        });
    }

    // The handle is closed before parsing starts.
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    let data: Value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match data {
        Value::Array(records) => {
            info!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        _ => Err(LoadError::NotAList {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        let err = load_expenses(&path).unwrap_err();
        assert!(matches!(err, LoadError::Missing { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_load_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        std::fs::write(
            &path,
            r#"[{"category": "Food", "amount": 12.5}, {"amount": "3"}]"#,
        )
        .unwrap();

        let records = load_expenses(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["category"], "Food");
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        std::fs::write(&path, "2025-08-21\t12.5\tFood\tLunch\n").unwrap();

        let err = load_expenses(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_load_not_a_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        std::fs::write(&path, r#"{"not": "a list"}"#).unwrap();

        let err = load_expenses(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotAList { .. }));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        std::fs::create_dir(&path).unwrap();

        let err = load_expenses(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
