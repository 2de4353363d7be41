//! # SafeSpace CLI Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the `safespace` front end.
//! Domain failures (invalid mood, export faults, bad rule tables) come from
//! `safespace_core::SafespaceError` and travel through `anyhow` unchanged;
//! the variants here cover failures that belong to the application itself.
//!
//! ## Architecture
//!
//! - `CliError`: a custom error enum using `thiserror` for application errors
//! - `Result<T>`: a type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if query.trim().is_empty() {
//!     return Err(CliError::ArgumentParsing("Question cannot be empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let responder = FaqResponder::from_path(&path)
//!     .with_context(|| format!("Failed to load FAQ rules from {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the SafeSpace CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
