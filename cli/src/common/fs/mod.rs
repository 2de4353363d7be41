//! # SafeSpace Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers for the CLI. Callers import the submodule directly,
//! e.g. `crate::common::fs::io::write_string_to_file`.
//!
pub mod io;
