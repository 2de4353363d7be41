//! # SafeSpace CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! that isn't a module like this one is compiled as a separate test crate
//! that runs the `safespace` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get SafeSpace Command (`safespace_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `safespace` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn safespace_cmd() -> Command {
    Command::cargo_bin("safespace").expect("Failed to find safespace binary for testing")
}

/// # Get Isolated SafeSpace Command (`safespace_cmd_in`)
///
/// Like `safespace_cmd`, but runs inside `dir` and points the user config
/// directory at it too, so a developer's own `config.toml` or
/// `.safespace.toml` never leaks into test results. A `.git` directory is
/// created in `dir` to stop the project config search there.
pub fn safespace_cmd_in(dir: &Path) -> Command {
    std::fs::create_dir_all(dir.join(".git")).expect("Failed to create .git marker");
    let mut cmd = safespace_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("RUST_LOG");
    cmd
}
