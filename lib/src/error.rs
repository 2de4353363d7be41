//! # SafeSpace Error Types
//!
//! File: lib/src/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error type returned by every fallible operation in
//! the session core. Errors are surfaced to the immediate caller (the
//! presentation layer), which decides how to show them to the user. Nothing in
//! the core retries or swallows an error.
//!
//! ## Architecture
//!
//! - `SafespaceError`: a `thiserror` enum covering invalid user input, export
//!   faults, and rule table configuration problems.
//! - `Result<T>`: shorthand for `std::result::Result<T, SafespaceError>`.
//!
//! An unmatched chat query is **not** an error; it is answered with the
//! configured default answer.
//!
//! ## Examples
//!
//! ```rust
//! use safespace_core::error::SafespaceError;
//! use safespace_core::mood::MoodLog;
//!
//! let mut log = MoodLog::new();
//! match log.append(9, None) {
//!     Err(SafespaceError::InvalidInput(msg)) => println!("rejected: {msg}"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the SafeSpace session core.
#[derive(Error, Debug)]
pub enum SafespaceError {
    /// A value supplied by the user is outside its accepted domain
    /// (mood score outside 1-5, blank required form field, malformed email).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The mood history could not be serialized.
    #[error("Export error: {0}")]
    Export(String),

    /// The FAQ rule table is structurally invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid FAQ pattern '{pattern}': {source}")]
    RulePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Result alias used throughout the core library.
pub type Result<T> = std::result::Result<T, SafespaceError>;
