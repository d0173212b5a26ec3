//! Tests for `gangway completions`.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gangway"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_rejects_unknown_shell() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}
