//! HTTP request handlers.

mod health;
mod tasks;

pub use health::health_check;
pub use tasks::{create_task, delete_task, execute_task, find_tasks, get_tasks};
