//! # SafeSpace Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the few filesystem operations the CLI performs:
//! reading configuration files and writing mood history exports. The wrappers
//! add context to `std::fs` errors and make sure export directories exist.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing;
//!   errors if the path exists but is not a directory.
//! - **`read_file_to_string`**: `fs::read_to_string` with a contextual error.
//! - **`write_string_to_file`**: ensures the parent directory exists, then
//!   writes (overwriting any existing file).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let csv = session.export_moods()?;
//! io::write_string_to_file(Path::new("./exports/mood_history.csv"), &csv)?;
//! ```
//!
use crate::core::error::{CliError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns `CliError::FileSystem` if the path exists but is not a directory,
/// or an I/O error with context if the directory cannot be created.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        // Path does not exist, create it recursively.
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(CliError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads a whole file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("file.csv").parent()` is `Some("")`; nothing to create then.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("exports/2025");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_write_creates_parent_and_reads_back() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/mood_history.csv");
        let content = "Date,Mood,Note\n";
        write_string_to_file(&file_path, content)?;
        assert_eq!(read_file_to_string(&file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.toml"));
        assert!(result.is_err());
        Ok(())
    }
}
