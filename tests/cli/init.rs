//! Tests for `gangway init`.

use crate::support::*;

#[test]
fn test_init_creates_config() {
    let t = Test::new();

    let output = t.init_cmd("boarding-test");
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    assert!(t.config_path().exists(), "gangway.toml should exist");

    let content = t.config_content();
    assert!(content.contains("boarding-test"));
    assert!(content.contains("vpc_cidr"));
    assert!(content.contains("10.0.0.0/16"));
    assert!(content.contains("t2.micro"));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::new();

    assert_success(&t.init_cmd("boarding-test"));

    let output = t.init_cmd("boarding-test");
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::new();

    assert_success(&t.init_cmd("first-name"));

    let output = t
        .cmd()
        .args(["init", "--name", "second-name", "--force"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.config_content().contains("second-name"));
}

#[test]
fn test_init_rejects_invalid_stack_name() {
    let t = Test::new();

    let output = t.init_cmd("9starts-with-digit");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid stack name");
}

#[test]
fn test_init_respects_region_and_key_path() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "init",
            "--name",
            "boarding-test",
            "--region",
            "us-east-1",
            "--key-path",
            "./keys/deploy.pub",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let content = t.config_content();
    assert!(content.contains("us-east-1"));
    assert!(content.contains("us-east-1a"));
    assert!(content.contains("./keys/deploy.pub"));
}

#[test]
fn test_init_without_name_derives_one() {
    let t = Test::new();

    let output = t.cmd().args(["init"]).output().unwrap();
    assert_success(&output);
    assert!(t.config_path().exists());
}
