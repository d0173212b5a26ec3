//! Test support utilities for gangway integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated — child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with an initialized config and a valid
    /// public key fixture the config points at.
    pub fn init(stack_name: &str) -> Self {
        let t = Self::new();
        let key_path = t.write_key_fixture("deploy_key.pub", Some("ci@gangway"));
        let output = t
            .cmd()
            .args([
                "init",
                "--name",
                stack_name,
                "--key-path",
                key_path.to_str().unwrap(),
            ])
            .output()
            .expect("failed to run gangway init");
        assert!(
            output.status.success(),
            "failed to initialize: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a gangway command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - Colors disabled for stable assertions
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gangway").expect("failed to find gangway binary");
        cmd.env("HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `gangway init --name <name>`.
    pub fn init_cmd(&self, name: &str) -> Output {
        self.cmd()
            .args(["init", "--name", name])
            .output()
            .expect("failed to run gangway init")
    }

    /// Write a valid ed25519 public key fixture into the project dir.
    pub fn write_key_fixture(&self, file_name: &str, comment: Option<&str>) -> PathBuf {
        let path = self.dir.path().join(file_name);
        std::fs::write(&path, format!("{}\n", fixtures::ed25519_key_line(comment)))
            .expect("failed to write key fixture");
        path
    }

    /// Path to the config file inside the project dir.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("gangway.toml")
    }

    /// Read the config file content.
    pub fn config_content(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("failed to read gangway.toml")
    }

    /// Rewrite one `key = "value"` line of the config in place.
    pub fn patch_config(&self, key: &str, value: &str) {
        let content = self.config_content();
        let mut patched = String::new();
        for line in content.lines() {
            if line.trim_start().starts_with(&format!("{} = ", key)) {
                patched.push_str(&format!("{} = \"{}\"\n", key, value));
            } else {
                patched.push_str(line);
                patched.push('\n');
            }
        }
        std::fs::write(self.config_path(), patched).expect("failed to patch gangway.toml");
    }
}
