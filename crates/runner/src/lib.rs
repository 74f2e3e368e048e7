#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Command execution for CLI-based backends
//!
//! [`CommandRunner`] abstracts process execution so backends can be tested
//! against scripted doubles. [`SystemRunner`] is the real implementation on
//! top of `tokio::process`; dropping its future aborts the child, and an
//! optional deadline bounds each invocation.
//!
//! [`run_for_operation`] is the bridge into the error taxonomy: a command
//! that ran and failed becomes an `ExternalFailure` carrying truncated
//! stdout/stderr, never a bare I/O error.

mod system;

pub use system::SystemRunner;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use pkgbridge_errors::{Error, ExternalFailure};
use pkgbridge_types::Operation;

/// Captured output of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the command exited successfully.
    pub success: bool,
    /// Exit code, when the process exited normally.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Abstracts command execution for CLI-based backends, enabling
/// deterministic unit testing through injected doubles.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute a command to completion and capture its output.
    ///
    /// A non-zero exit is an `Ok` with `success == false`; `Err` is reserved
    /// for failures to run at all (missing binary, spawn error, deadline).
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be spawned or did not
    /// complete within the runner's deadline.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, Error>;
}

/// Execution settings for [`SystemRunner`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Deadline for a single command. `None` runs unbounded; cancellation is
    /// then the caller's responsibility via future drop.
    #[serde(default)]
    pub timeout: Option<Duration>,
}

/// Execute a command and wrap any failure in an `ExternalFailure` carrying
/// the operation and backend for context plus truncated captured output.
///
/// # Errors
///
/// Returns `Error::External` when the command exits non-zero or cannot be
/// executed.
pub async fn run_for_operation(
    runner: &dyn CommandRunner,
    operation: Operation,
    backend: &str,
    program: &str,
    args: &[&str],
) -> Result<CommandOutput, Error> {
    match runner.run(program, args).await {
        Ok(output) if output.success => Ok(output),
        Ok(output) => {
            let status = match output.exit_code {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            };
            Err(Error::external(
                ExternalFailure::new(operation, backend)
                    .with_output(&output.stdout, &output.stderr)
                    .with_source(status),
            ))
        }
        Err(err) => Err(Error::external(
            ExternalFailure::new(operation, backend).with_source(err.to_string()),
        )),
    }
}
