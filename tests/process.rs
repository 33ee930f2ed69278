//! Process runner contract: success, failure, launch error, and timeout all
//! come back as the same outcome shape.

use std::time::Duration;

use edgekit_benchmarks::process::run_command;

fn cmd(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn successful_run_captures_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_command(
        &cmd(&["sh", "-c", "echo hello"]),
        dir.path(),
        Duration::from_secs(10),
    );
    assert!(outcome.success);
    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.stdout.trim(), "hello");
    assert!(outcome.stderr.is_empty());
}

#[test]
fn nonzero_exit_is_failure_not_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_command(
        &cmd(&["sh", "-c", "echo oops >&2; exit 3"]),
        dir.path(),
        Duration::from_secs(10),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.exit_code, 3);
    assert_eq!(outcome.stderr.trim(), "oops");
}

#[test]
fn missing_executable_folds_into_outcome() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_command(
        &cmd(&["./definitely_not_an_executable"]),
        dir.path(),
        Duration::from_secs(10),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.exit_code, -1);
    assert!(!outcome.stderr.is_empty());
}

#[test]
fn empty_command_line_is_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_command(&[], dir.path(), Duration::from_secs(10));
    assert!(!outcome.success);
}

#[test]
fn timeout_kills_child_and_reports_bound() {
    let dir = tempfile::tempdir().expect("tempdir");
    let timeout = Duration::from_millis(200);
    let outcome = run_command(&cmd(&["sleep", "30"]), dir.path(), timeout);
    assert!(!outcome.success);
    assert!(outcome.stderr.contains("timeout"));
    // Elapsed is reported as the bound itself, not the kill latency.
    assert_eq!(outcome.elapsed, timeout);
}

#[test]
fn command_line_is_recorded_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_command(&cmd(&["sh", "-c", "true"]), dir.path(), Duration::from_secs(10));
    assert_eq!(outcome.command, "sh -c true");
}

#[test]
fn runs_in_requested_working_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_command(&cmd(&["pwd"]), dir.path(), Duration::from_secs(10));
    assert!(outcome.success);
    let reported = std::path::PathBuf::from(outcome.stdout.trim())
        .canonicalize()
        .expect("canonicalize pwd");
    let expected = dir.path().canonicalize().expect("canonicalize tempdir");
    assert_eq!(reported, expected);
}
