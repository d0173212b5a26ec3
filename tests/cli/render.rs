//! Tests for `gangway render`.

use crate::support::*;

#[test]
fn test_render_without_init_fails() {
    let t = Test::new();

    let output = t.cmd().args(["render"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_render_emits_valid_json() {
    let t = Test::init("boarding-test");

    let output = t.cmd().args(["render"]).output().unwrap();
    assert_success(&output);

    let doc: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(doc["AWSTemplateFormatVersion"], "2010-09-09");
    assert!(doc["Resources"]["Instance"].is_object());
}

#[test]
fn test_render_compact_is_one_line() {
    let t = Test::init("boarding-test");

    let output = t.cmd().args(["render", "--compact"]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim().lines().count(), 1);
}

#[test]
fn test_render_to_file() {
    let t = Test::init("boarding-test");

    let output = t
        .cmd()
        .args(["render", "--out", "template.json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "template.json");

    let content = std::fs::read_to_string(t.dir.path().join("template.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert!(doc["Resources"]["KeyPair"].is_object());
}

#[test]
fn test_render_embeds_only_public_material() {
    let t = Test::init("boarding-test");

    let output = t.cmd().args(["render"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "ssh-ed25519");
    assert_stdout_excludes(&output, "PRIVATE KEY");
}

#[test]
fn test_render_refuses_private_key_file() {
    let t = Test::init("boarding-test");
    std::fs::write(t.dir.path().join("deploy_key.pub"), PRIVATE_KEY_PEM).unwrap();

    let output = t.cmd().args(["render"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "private key");
    assert_stdout_excludes(&output, "BEGIN OPENSSH");
}
