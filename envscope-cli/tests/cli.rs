//! Integration tests for the envscope CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn envscope() -> Command {
    Command::cargo_bin("envscope").expect("Failed to find envscope binary")
}

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    envscope()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    envscope()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envscope"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag lists the commands.
#[test]
fn test_cli_help_flag() {
    envscope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Directory-scoped secrets with trust-gated shell loading",
        ))
        .stdout(predicate::str::contains("hook-reset"))
        .stdout(predicate::str::contains("show-data-dir"));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    envscope()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that the hook rejects unknown shells at parse time.
#[test]
fn test_cli_hook_rejects_unknown_shell() {
    envscope()
        .args(["hook", "--shell", "tcsh"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completions_bash() {
    envscope()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("envscope"));
}
