//! Execution engine for TaskReg
//!
//! Runs a stored shell command as a child process, captures its combined
//! stdout/stderr, and produces an [`Execution`](taskreg_core::Execution)
//! record. Running a command never fails from the caller's point of view:
//! launch and capture errors become the record's output text.
//!
//! # Example
//!
//! ```rust,no_run
//! use taskreg_exec::{CommandExecutor, Executor};
//!
//! async fn run() {
//!     let executor = CommandExecutor::new();
//!     let execution = executor.run("echo hello").await;
//!
//!     println!("{}", execution.output());
//! }
//! ```

mod error;
mod executor;
mod shell;

// Re-export main types
pub use error::ExecError;
pub use executor::{CommandExecutor, Executor, EXIT_STATUS_PREFIX, FAILURE_PREFIX};
pub use shell::Shell;
