//! # SafeSpace CLI Rules Integration Tests
//!
//! File: cli/tests/rules.rs
//! Author: Christi Mahu
//!

mod common;

use common::safespace_cmd_in;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_rules_lists_builtin_table() {
    let dir = tempdir().unwrap();
    safespace_cmd_in(dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. /"))
        .stdout(predicate::str::contains("10. /"))
        .stdout(predicate::str::contains("Default: Sorry, I didn't catch that."));
}

#[test]
fn test_rules_patterns_only_prints_ten_lines() {
    let dir = tempdir().unwrap();
    let output = safespace_cmd_in(dir.path())
        .args(["rules", "--patterns-only"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 10);
}

#[test]
fn test_rules_rejects_invalid_pattern_file() {
    let dir = tempdir().unwrap();
    let rules = dir.path().join("broken.toml");
    std::fs::write(
        &rules,
        "default_answer = \"?\"\n\n[[rules]]\npattern = '(unclosed'\nanswer = 'x'\n",
    )
    .unwrap();

    safespace_cmd_in(dir.path())
        .arg("--rules")
        .arg(&rules)
        .arg("rules")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid FAQ pattern '(unclosed'"));
}
