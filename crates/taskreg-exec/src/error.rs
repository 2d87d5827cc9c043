//! Error types for the execution engine.
//!
//! These never reach callers of [`Executor::run`](crate::Executor::run); they
//! are rendered into the execution output instead.

use thiserror::Error;

/// Errors that can occur while launching or capturing a child process.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Failed to spawn the shell process.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A piped stream was not available on the child.
    #[error("failed to capture {0} of child process")]
    MissingPipe(&'static str),

    /// Reading the output streams failed.
    #[error("failed to read process output: {0}")]
    Read(#[source] std::io::Error),

    /// Waiting for the child to exit failed.
    #[error("failed to wait for process: {0}")]
    Wait(#[source] std::io::Error),
}
