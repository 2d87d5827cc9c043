//! Service layer: the task operations exposed to the HTTP boundary.

pub mod task_service;

pub use task_service::{ServiceError, TaskService};
