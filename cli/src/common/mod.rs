//! # SafeSpace Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers used by the command handlers, kept apart from command
//! logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: reading config files and writing mood history exports.
//! - **`ui`**: plain-text rendering of transcript turns, mood entries and help.
//!
pub mod fs;
pub mod ui;
