//! Tests for `gangway destroy`.
//!
//! Only the offline paths: anything past the confirmation gate talks to
//! the provider.

use crate::support::*;

#[test]
fn test_destroy_without_init_fails() {
    let t = Test::new();

    let output = t.cmd().args(["destroy", "--yes"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_destroy_aborts_on_wrong_confirmation() {
    let t = Test::init("boarding-test");

    let output = t
        .cmd()
        .args(["destroy"])
        .write_stdin("some-other-stack\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "aborted");
}

#[test]
fn test_destroy_aborts_on_empty_confirmation() {
    let t = Test::init("boarding-test");

    let output = t.cmd().args(["destroy"]).write_stdin("\n").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "aborted");
}
