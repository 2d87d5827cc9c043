//! In-memory task store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use taskreg_core::{NewTask, Task, TaskId};

use super::{Documents, StoreError, TaskStore};

/// Task store that keeps every document in process memory.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    docs: RwLock<Documents>,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.docs.read().await.as_slice().len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, new: NewTask) -> Result<Task, StoreError> {
        Ok(self.docs.write().await.insert(new))
    }

    async fn save(&self, task: Task) -> Result<Task, StoreError> {
        self.docs.write().await.upsert(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, StoreError> {
        Ok(self.docs.read().await.get(id))
    }

    async fn find_all(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.docs.read().await.all())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Task>, StoreError> {
        Ok(self.docs.read().await.name_containing(fragment))
    }

    async fn delete_by_id(&self, id: &TaskId) -> Result<(), StoreError> {
        self.docs.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let store = InMemoryTaskStore::new();
        let a = store.insert(NewTask::new("a", "o", "echo a")).await.unwrap();
        let b = store.insert(NewTask::new("b", "o", "echo b")).await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryTaskStore::new();
        for name in ["first", "second", "third"] {
            store.insert(NewTask::new(name, "o", "echo")).await.unwrap();
        }

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_document() {
        let store = InMemoryTaskStore::new();
        let mut task = store.insert(NewTask::new("n", "o", "echo")).await.unwrap();
        task.owner = "someone-else".to_string();
        store.save(task.clone()).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.find_by_id(task.id()).await.unwrap(), Some(task));
    }

    #[tokio::test]
    async fn test_name_search_is_case_insensitive() {
        let store = InMemoryTaskStore::new();
        store.insert(NewTask::new("Nightly job", "o", "echo")).await.unwrap();
        store.insert(NewTask::new("JOB runner", "o", "echo")).await.unwrap();
        store.insert(NewTask::new("cleanup", "o", "echo")).await.unwrap();

        let found = store.find_by_name_containing("Job").await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|t| t.name.to_lowercase().contains("job")));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let store = InMemoryTaskStore::new();
        store.insert(NewTask::new("n", "o", "echo")).await.unwrap();

        store.delete_by_id(&TaskId::new("missing")).await.unwrap();
        assert_eq!(store.len().await, 1);
    }
}
