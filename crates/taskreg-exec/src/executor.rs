//! Command executor for running task commands via subprocess.
//!
//! This module provides the [`Executor`] seam used by the task service and
//! the production [`CommandExecutor`], which spawns the host shell, drains
//! stdout and stderr into one buffer, and waits for the exit code.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use chrono::Utc;
use taskreg_core::Execution;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::error::ExecError;
use crate::shell::Shell;

/// Prefix of the status line appended after a completed run.
pub const EXIT_STATUS_PREFIX: &str = "Process exited with code: ";

/// Prefix of the output recorded when a run could not be launched or captured.
pub const FAILURE_PREFIX: &str = "Execution failed: ";

/// Runs a command and always produces an execution record.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run `command` to completion.
    ///
    /// Blocks the calling task until the child exits. Failures are reported
    /// inside the returned record, never as an error.
    async fn run(&self, command: &str) -> Execution;
}

/// Executes commands through the host shell.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    /// Fixed shell; when unset the host shell is resolved on every run.
    shell: Option<Shell>,

    /// Working directory for children (inherited when unset).
    working_dir: Option<PathBuf>,
}

impl CommandExecutor {
    /// Create a new executor using the host shell and inherited directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always use the given shell instead of detecting the host's.
    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = Some(shell);
        self
    }

    /// Run children in the given directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Spawn the command and collect its combined output plus status line.
    async fn capture(&self, shell: &Shell, command: &str) -> Result<String, ExecError> {
        let mut cmd = shell.command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!(program = %shell.program(), command = %command, "Spawning child process");

        let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
            program: shell.program().to_string(),
            source,
        })?;

        let stdout = child.stdout.take().ok_or(ExecError::MissingPipe("stdout"))?;
        let stderr = child.stderr.take().ok_or(ExecError::MissingPipe("stderr"))?;

        // Both pipes must be drained before waiting, or a chatty child can
        // fill one of them and never exit.
        let mut output = drain_combined(BufReader::new(stdout), BufReader::new(stderr))
            .await
            .map_err(ExecError::Read)?;

        let status = child.wait().await.map_err(ExecError::Wait)?;
        let exit_code = status.code().unwrap_or(-1);

        output.push_str(EXIT_STATUS_PREFIX);
        output.push_str(&exit_code.to_string());

        info!(exit_code = exit_code, success = status.success(), "Child process exited");

        Ok(output)
    }
}

#[async_trait]
impl Executor for CommandExecutor {
    async fn run(&self, command: &str) -> Execution {
        let shell = self.shell.clone().unwrap_or_else(Shell::host);

        info!(command = %command, shell = %shell.program(), "Starting execution");

        let start_time = Utc::now();
        let output = match self.capture(&shell, command).await {
            Ok(output) => output,
            Err(e) => {
                warn!(command = %command, error = %e, "Execution failed");
                format!("{FAILURE_PREFIX}{e}")
            }
        };
        let end_time = Utc::now();

        info!(
            duration_ms = (end_time - start_time).num_milliseconds(),
            output_len = output.len(),
            "Execution completed"
        );

        Execution::new(start_time, end_time, output)
    }
}

/// Read two streams to EOF, appending whole lines in arrival order.
///
/// Each line is re-terminated with `\n`; invalid UTF-8 is replaced.
async fn drain_combined<A, B>(mut out: A, mut err: B) -> std::io::Result<String>
where
    A: AsyncBufRead + Unpin,
    B: AsyncBufRead + Unpin,
{
    let mut combined = String::new();
    let mut out_line = Vec::new();
    let mut err_line = Vec::new();
    let mut out_open = true;
    let mut err_open = true;

    // read_until keeps partial bytes in its buffer when the other branch
    // wins, so the buffers are only cleared after a full line.
    while out_open || err_open {
        tokio::select! {
            read = out.read_until(b'\n', &mut out_line), if out_open => {
                if read? == 0 {
                    out_open = false;
                } else {
                    push_line(&mut combined, &out_line);
                    out_line.clear();
                }
            }
            read = err.read_until(b'\n', &mut err_line), if err_open => {
                if read? == 0 {
                    err_open = false;
                } else {
                    push_line(&mut combined, &err_line);
                    err_line.clear();
                }
            }
        }
    }

    Ok(combined)
}

fn push_line(combined: &mut String, raw: &[u8]) {
    let text = String::from_utf8_lossy(raw);
    let line = text.trim_end_matches('\n').trim_end_matches('\r');
    combined.push_str(line);
    combined.push('\n');
}
