//! Core domain errors.

use thiserror::Error;

/// Core domain errors for TaskReg.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Command rejected by the safety gate.
    #[error("Unsafe command detected: {0}")]
    UnsafeCommand(String),
}
