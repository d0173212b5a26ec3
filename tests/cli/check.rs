//! Tests for `gangway check`.

use crate::support::*;

#[test]
fn test_check_without_init_hints_at_init() {
    let t = Test::new();

    let output = t.cmd().args(["check"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
    assert_stdout_contains(&output, "gangway init");
}

#[test]
fn test_check_with_valid_setup() {
    let t = Test::init("boarding-test");

    let output = t.cmd().args(["check"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "configuration is valid");
    assert_stdout_contains(&output, "SHA256:");
    assert_stdout_contains(&output, "ED25519");
}

#[test]
fn test_check_missing_key_hints_at_keygen() {
    let t = Test::new();
    assert_success(&t.init_cmd("boarding-test"));
    t.patch_config("path", "./missing_key.pub");

    let output = t.cmd().args(["check"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
    assert_stdout_contains(&output, "ssh-keygen");
}

#[test]
fn test_check_rejects_subnet_outside_vpc() {
    let t = Test::init("boarding-test");
    t.patch_config("subnet_cidr", "192.168.0.0/24");

    let output = t.cmd().args(["check"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not contained");
}

#[test]
fn test_check_rejects_host_bits_in_cidr() {
    let t = Test::init("boarding-test");
    t.patch_config("vpc_cidr", "10.0.0.1/16");

    let output = t.cmd().args(["check"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "host bits");
}

#[test]
fn test_check_rejects_malformed_key() {
    let t = Test::init("boarding-test");
    std::fs::write(t.dir.path().join("deploy_key.pub"), INVALID_KEY_LINE).unwrap();

    let output = t.cmd().args(["check"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "base64");
}

#[test]
fn test_check_refuses_private_key() {
    let t = Test::init("boarding-test");
    std::fs::write(t.dir.path().join("deploy_key.pub"), PRIVATE_KEY_PEM).unwrap();

    let output = t.cmd().args(["check"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "private key");
}

#[test]
fn test_check_json_output() {
    let t = Test::init("boarding-test");

    let output = t.cmd().args(["check", "--json"]).output().unwrap();
    assert_success(&output);

    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(doc["stack"], "boarding-test");
    assert_eq!(doc["subnet_hosts"], 254);
    assert_eq!(doc["key"]["algorithm"], "ED25519");
    assert_eq!(doc["key"]["bits"], 256);
    assert!(doc["key"]["fingerprint"]
        .as_str()
        .unwrap()
        .starts_with("SHA256:"));
}
