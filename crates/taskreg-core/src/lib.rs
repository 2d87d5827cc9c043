//! TaskReg Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Process execution
//! - Network/HTTP
//! - Storage
//!
//! All types here represent the core business domain of TaskReg: named shell
//! commands, their append-only execution history, and the safety gate that
//! decides which commands may be stored at all.

pub mod error;
pub mod ids;
pub mod safety;
pub mod task;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::TaskId;
pub use safety::{is_allowed, DENYLIST};
pub use task::{Execution, NewTask, Task};
