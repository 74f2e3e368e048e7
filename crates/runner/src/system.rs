//! Real command execution on top of `tokio::process`

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use pkgbridge_errors::Error;

use crate::{CommandOutput, CommandRunner, RunnerConfig};

/// Executes real commands with `tokio::process`.
///
/// Children are killed when the invoking future is dropped, so cancelling an
/// operation aborts its external work. When a timeout is configured, an
/// overrun surfaces as an `Io` error with `TimedOut` kind; the operation
/// wrapper turns it into an `ExternalFailure`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    config: RunnerConfig,
}

impl SystemRunner {
    /// Runner with the given execution settings.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    async fn wait(&self, command: &mut Command) -> Result<std::process::Output, Error> {
        let child = command.spawn()?;
        let output = child.wait_with_output();
        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, output).await.map_err(|_| {
                Error::Io {
                    kind: std::io::ErrorKind::TimedOut,
                    message: format!("command did not finish within {limit:?}"),
                }
            })?,
            None => output.await,
        }
        .map_err(Error::from)
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, Error> {
        tracing::debug!(program, ?args, "executing command");
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = self.wait(&mut command).await?;
        Ok(CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
