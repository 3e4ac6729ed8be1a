//! Test execution runner
//!
//! Runs a single test file as a direct subprocess with a private scratch
//! directory exposed through the `TEST_DIR` environment variable. The
//! child's environment is reduced to exactly that one variable, so tests
//! relying on `PATH` or other ambient variables fail under this harness.

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::models::TestResult;

/// Environment variable carrying the scratch directory path to the child.
pub const TEST_DIR_ENV: &str = "TEST_DIR";

/// Failure to get a test process off the ground or to see it finish, as
/// opposed to a test that ran and exited non-zero. Both fold into a
/// not-passed [`TestResult`]; neither aborts the batch.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot create scratch directory: {0}")]
    Scratch(#[source] io::Error),

    #[error("cannot launch {path}: {source}", path = .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot collect output of {path}: {source}", path = .path.display())]
    Wait {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} did not finish within {limit:.3}s", path = .path.display(), limit = .limit.as_secs_f64())]
    TimedOut { path: PathBuf, limit: Duration },
}

/// Console feedback level while tests run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    /// No per-test output
    Silent,
    /// One `.` or `F` per test, no newline
    Compact,
    /// A pre-run announcement plus a line with elapsed time and PASS/FAIL
    Verbose,
}

/// Runs test files one at a time with the configured options.
#[derive(Clone, Debug)]
pub struct TestRunner {
    change_directory: bool,
    verbosity: Verbosity,
    timeout: Option<Duration>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            change_directory: false,
            verbosity: Verbosity::Silent,
            timeout: None,
        }
    }

    /// Run each test in its own parent directory instead of the invoking
    /// working directory.
    pub fn change_directory(mut self, enabled: bool) -> Self {
        self.change_directory = enabled;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Kill tests that run longer than `limit`. `None` means the harness
    /// blocks until the test exits on its own.
    pub fn timeout(mut self, limit: Option<Duration>) -> Self {
        self.timeout = limit;
        self
    }

    /// Run a single test file and record its outcome.
    ///
    /// Launch failures and non-zero exits are both contained in the
    /// returned result; this method never errors.
    pub async fn run(&self, path: &Path) -> TestResult {
        if self.verbosity == Verbosity::Verbose {
            eprint!("Execute {} : ", path.display());
        }

        let mut result = TestResult::new(path.display().to_string());
        let started = Instant::now();

        if let Err(e) = self.run_inner(path, &mut result).await {
            debug!("{}: {}", path.display(), e);
            // Only `passed=false` is guaranteed on a launch-level failure;
            // elapsed keeps the best-effort measurement.
            result.passed = false;
            result.elapsed = started.elapsed();
        }

        self.print_status(&result);
        result
    }

    async fn run_inner(&self, path: &Path, result: &mut TestResult) -> Result<(), RunError> {
        let scratch = TempDir::new().map_err(RunError::Scratch)?;
        let outcome = self.spawn_and_wait(path, scratch.path()).await;

        // The scratch directory goes away on every exit path. Removal
        // problems are surfaced but never change the test outcome.
        if let Err(e) = scratch.close() {
            warn!("failed to remove scratch directory: {e}");
        }

        let (output, elapsed) = outcome?;
        result.stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        result.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        result.elapsed = elapsed;
        result.passed = output.status.success();
        Ok(())
    }

    async fn spawn_and_wait(
        &self,
        path: &Path,
        scratch: &Path,
    ) -> Result<(Output, Duration), RunError> {
        let absolute = std::path::absolute(path).map_err(|source| RunError::Spawn {
            path: path.to_path_buf(),
            source,
        })?;

        let mut command = Command::new(&absolute);
        command
            .env_clear()
            .env(TEST_DIR_ENV, scratch)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if self.change_directory {
            if let Some(parent) = absolute.parent() {
                command.current_dir(parent);
            }
        }

        let started = Instant::now();
        let child = command.spawn().map_err(|source| RunError::Spawn {
            path: absolute.clone(),
            source,
        })?;

        let waited = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| RunError::TimedOut {
                    path: absolute.clone(),
                    limit,
                })?,
            None => child.wait_with_output().await,
        };

        let output = waited.map_err(|source| RunError::Wait {
            path: absolute,
            source,
        })?;

        Ok((output, started.elapsed()))
    }

    fn print_status(&self, result: &TestResult) {
        match self.verbosity {
            Verbosity::Silent => {}
            Verbosity::Compact => eprint!("{}", result.status_char()),
            Verbosity::Verbose => eprintln!(
                "{:.3}\t\t{}",
                result.elapsed.as_secs_f64(),
                result.status_label()
            ),
        }
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}
