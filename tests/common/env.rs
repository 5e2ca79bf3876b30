//! Test environment for running the branchtree binary in isolation.
//!
//! Provides `TestEnv` - a temp directory holding the snapshot (and optional
//! project config), with HOME and XDG dirs pointed inside it so no user
//! config leaks into a test.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running a branchtree CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.combined_output())
        })
    }
}

pub struct TestEnv {
    pub dir: TempDir,
    snapshot: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    /// Write `snapshot` as `repo.json` in a fresh temp directory
    pub fn with_snapshot(snapshot: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("repo.json");
        fs::write(&path, snapshot).expect("write snapshot");
        Self {
            dir,
            snapshot: path,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_branchtree")),
        }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot
    }

    /// Write `.branchtree.toml` next to the snapshot
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.dir.path().join(".branchtree.toml"), content).expect("write config");
    }

    /// Current snapshot document on disk
    pub fn snapshot_json(&self) -> serde_json::Value {
        let content = fs::read_to_string(&self.snapshot).expect("read snapshot");
        serde_json::from_str(&content).expect("snapshot stays valid JSON")
    }

    /// Run `branchtree <command> <snapshot> <args...>`
    pub fn run(&self, command: &str, args: &[&str]) -> TestResult {
        let home = self.dir.path().join("home");
        let output = Command::new(&self.bin)
            .arg(command)
            .arg(&self.snapshot)
            .args(args)
            .current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("LANG", "C")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("BRANCHTREE_PLACEMENT")
            .env_remove("BRANCHTREE_STORAGE_URL")
            .env_remove("BRANCHTREE_NOTICE_MS")
            .output()
            .expect("failed to run branchtree");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
