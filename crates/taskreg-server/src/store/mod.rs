//! Task store contract.
//!
//! The task service only talks to persistence through [`TaskStore`]. A Task
//! and its execution history are always read and written as one document;
//! there is no way to store or address an execution on its own.

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use taskreg_core::{NewTask, Task, TaskId};

pub use file::JsonFileTaskStore;
pub use memory::InMemoryTaskStore;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be encoded or decoded.
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence interface for Tasks.
///
/// Writes are last-write-wins; the store does no per-task coordination.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Store a new Task under a freshly assigned id.
    async fn insert(&self, new: NewTask) -> Result<Task, StoreError>;

    /// Insert or replace the Task with the same id.
    async fn save(&self, task: Task) -> Result<Task, StoreError>;

    /// Look up a Task by id.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, StoreError>;

    /// All Tasks in insertion order.
    async fn find_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Tasks whose name contains `fragment`, ignoring case.
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Task>, StoreError>;

    /// Remove a Task. Removing an unknown id is a no-op.
    async fn delete_by_id(&self, id: &TaskId) -> Result<(), StoreError>;
}

/// Insertion-ordered document set shared by the store implementations.
#[derive(Debug, Clone, Default)]
struct Documents {
    tasks: Vec<Task>,
}

impl Documents {
    fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    fn insert(&mut self, new: NewTask) -> Task {
        let task = Task::from_new(TaskId::generate(), new);
        self.tasks.push(task.clone());
        task
    }

    fn upsert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id() == task.id()) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
    }

    fn get(&self, id: &TaskId) -> Option<Task> {
        self.tasks.iter().find(|t| t.id() == id).cloned()
    }

    fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn name_containing(&self, fragment: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.name_contains(fragment))
            .cloned()
            .collect()
    }

    /// Returns true if a Task was removed.
    fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        self.tasks.len() != before
    }

    fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}
