//! Test runner for the compiled `flow` binary.
//!
//! Runs the real executable with a scrubbed environment and captures both
//! streams, so tests can assert on the exact bytes a user (or agent) would
//! see. Robot-mode payloads parse from stdout, robot errors from stderr.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde_json::Value;

pub struct CliRunner {
    binary: PathBuf,
    env: Vec<(String, String)>,
    working_dir: Option<PathBuf>,
}

impl Default for CliRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CliRunner {
    /// Point at the binary cargo built for this test run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(env!("CARGO_BIN_EXE_flow")),
            env: Vec::new(),
            working_dir: None,
        }
    }

    /// Set an environment variable for the child process.
    #[must_use]
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Run the binary from this directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Run `flow` with the given arguments and capture the outcome.
    ///
    /// # Panics
    ///
    /// Panics if the binary cannot be spawned at all.
    #[must_use]
    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

        // Scrub host state the binary reads, so runs are deterministic.
        // with_env re-adds anything a test wants back.
        for key in ["FLOW_FORMAT", "FLOW_CONFIG", "NO_COLOR", "RUST_LOG"] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().expect("failed to spawn the flow binary");
        CliResult {
            args: args.iter().map(ToString::to_string).collect(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }

    /// Run with a leading `--robot` flag.
    #[must_use]
    pub fn run_robot(&self, args: &[&str]) -> CliResult {
        let mut full_args = vec!["--robot"];
        full_args.extend(args);
        self.run(&full_args)
    }
}

/// One finished invocation. Assertion methods panic with the captured
/// streams in the message and return `&Self` so checks chain.
#[derive(Debug)]
pub struct CliResult {
    pub args: Vec<String>,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliResult {
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.exit_code == 0,
            "flow {:?} exited {} (stderr: {})",
            self.args,
            self.exit_code,
            self.stderr
        );
        self
    }

    pub fn assert_failure(&self) -> &Self {
        assert!(
            self.exit_code != 0,
            "flow {:?} succeeded but should not have (stdout: {})",
            self.args,
            self.stdout
        );
        self
    }

    pub fn assert_exit_code(&self, expected: i32) -> &Self {
        assert_eq!(
            self.exit_code, expected,
            "flow {:?} exited {}, wanted {expected}",
            self.args, self.exit_code
        );
        self
    }

    pub fn assert_stdout_contains(&self, needle: &str) -> &Self {
        assert!(
            self.stdout.contains(needle),
            "stdout of flow {:?} lacks {needle:?}:\n{}",
            self.args,
            self.stdout
        );
        self
    }

    pub fn assert_stdout_not_contains(&self, needle: &str) -> &Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout of flow {:?} unexpectedly contains {needle:?}",
            self.args
        );
        self
    }

    pub fn assert_stdout_is_empty(&self) -> &Self {
        assert!(
            self.stdout.is_empty(),
            "stdout of flow {:?} should be empty:\n{}",
            self.args,
            self.stdout
        );
        self
    }

    /// Parse stdout as one JSON document.
    ///
    /// # Panics
    ///
    /// Panics when stdout is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }

    /// Parse stderr as one JSON document. Robot-mode errors land there.
    ///
    /// # Panics
    ///
    /// Panics when stderr is not valid JSON.
    #[must_use]
    pub fn stderr_json(&self) -> Value {
        serde_json::from_str(self.stderr.trim())
            .unwrap_or_else(|e| panic!("stderr is not JSON ({e}):\n{}", self.stderr))
    }
}
