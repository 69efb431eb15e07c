//! Subprocess harness for fail-fast behavior.
//!
//! A failed check exits the process, which no in-process assertion can
//! observe. The parent test re-runs the current test binary filtered to a
//! single "child" test, marks it through an environment variable, and
//! inspects the exit status and output.

#![allow(dead_code)]

use std::env;
use std::process::{Command, ExitStatus};

/// Environment variable naming the child test that should actually run.
pub const CHILD_ENV: &str = "DIFFVG_CUDA_TEST_CHILD";

/// Prefix of the stdout line in which a child announces where it will fail.
pub const LOCATION_PREFIX: &str = "expected-location ";

#[derive(Debug)]
pub struct ChildOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ChildOutput {
    /// `file:line` announced by the child right before the failing call.
    pub fn expected_location(&self) -> Option<&str> {
        find_location(&self.stdout)
    }
}

/// Find the announced location in a child's stdout.
///
/// libtest prints `test <name> ... ` without a newline before running the
/// body, so the announcement can share a line with that prefix.
pub fn find_location(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .find_map(|line| line.split_once(LOCATION_PREFIX).map(|(_, rest)| rest))
        .map(str::trim)
}

/// True when running inside a child spawned for `test_name`.
pub fn is_child(test_name: &str) -> bool {
    env::var(CHILD_ENV).map(|v| v == test_name).unwrap_or(false)
}

/// Route `tracing` events to stderr so the parent can see them.
pub fn init_child_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Re-run this test binary with only `test_name` enabled.
pub fn run_child(test_name: &str, extra_env: &[(&str, &str)]) -> ChildOutput {
    let exe = env::current_exe().expect("current test executable path");
    let mut cmd = Command::new(exe);
    cmd.args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name);
    for (key, value) in extra_env {
        cmd.env(key, value);
    }

    let output = cmd
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn child {}: {}", test_name, e));

    ChildOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
