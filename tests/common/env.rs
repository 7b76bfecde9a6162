//! Test environment builder for isolated lighter runs.
//!
//! Provides `TestEnv` - a temp workspace holding service files, globals and
//! a Maven-style repository, plus helpers to run the lighter binary in it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the lighter binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }
}

/// Isolated workspace for one test
pub struct TestEnv {
    pub root: TempDir,
    lighter_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            lighter_bin: PathBuf::from(env!("CARGO_BIN_EXE_lighter")),
        }
    }

    /// Path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Publish an app descriptor into the workspace's `repo/` directory
    pub fn publish_descriptor(&self, group: &str, artifact: &str, version: &str, json: &str) {
        let relative = format!(
            "repo/{}/{}/{}/{}-{}.json",
            group.replace('.', "/"),
            artifact,
            version,
            artifact,
            version
        );
        self.write_file(&relative, json);
    }

    /// Absolute file:// URL of the workspace repository
    pub fn repository_url(&self) -> String {
        format!("file://{}", self.path("repo").display())
    }

    /// Run lighter from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run lighter from the workspace root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.lighter_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("MARATHON_URL")
            .env_remove("VERBOSE")
            .env_remove("RUST_LOG")
            // The stub Marathon listens on loopback
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env("no_proxy", "127.0.0.1,localhost");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute lighter");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
