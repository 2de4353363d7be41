//! # SafeSpace CLI Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! configuration loading and the application error type. Domain logic does
//! not live here; it lives in the `safespace-core` library crate.
//!
//! ## Architecture
//!
//! - `config`: layered configuration loading, merging, and validation
//! - `error`: application error types and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CliError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
