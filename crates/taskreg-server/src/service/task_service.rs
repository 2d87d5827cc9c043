//! TaskService: create, read, search, delete and execute tasks.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use taskreg_core::{safety, CoreError, NewTask, Task, TaskId};
use taskreg_exec::Executor;

use crate::store::{StoreError, TaskStore};

/// Errors surfaced by the task service.
///
/// "Not found" is not an error here; lookups return `Option`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was rejected before anything was stored.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The store failed to read or write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Composes the safety gate, the execution engine and a task store.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    executor: Arc<dyn Executor>,
}

impl TaskService {
    /// Create a new TaskService.
    pub fn new(store: Arc<dyn TaskStore>, executor: Arc<dyn Executor>) -> Self {
        Self { store, executor }
    }

    /// Register a task if its command passes the safety gate.
    pub async fn create(&self, new: NewTask) -> Result<Task, ServiceError> {
        if let Err(e) = safety::check(&new.command) {
            warn!(command = %new.command, name = %new.name, "Rejected unsafe command");
            return Err(e.into());
        }

        let task = self.store.insert(new).await?;

        info!(
            task_id = %task.id(),
            name = %task.name,
            owner = %task.owner,
            "Created task"
        );

        Ok(task)
    }

    pub async fn get_by_id(&self, id: &TaskId) -> Result<Option<Task>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Task>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Tasks whose name contains `fragment`, ignoring case. May be empty.
    pub async fn find_by_name(&self, fragment: &str) -> Result<Vec<Task>, ServiceError> {
        Ok(self.store.find_by_name_containing(fragment).await?)
    }

    /// Delete a task. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: &TaskId) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).await?;
        info!(task_id = %id, "Deleted task");
        Ok(())
    }

    /// Run a task's command and append the resulting execution.
    ///
    /// Returns `Ok(None)` if the task does not exist, in which case nothing
    /// is run. The command is not re-checked by the safety gate; it was
    /// checked once at creation. Concurrent executions of the same task are
    /// not coordinated, so the later save wins.
    pub async fn execute(&self, id: &TaskId) -> Result<Option<Task>, ServiceError> {
        let Some(mut task) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        info!(task_id = %id, command = %task.command, "Executing task");

        let execution = self.executor.run(&task.command).await;
        task.record_execution(execution);

        let task = self.store.save(task).await?;

        info!(
            task_id = %id,
            executions = task.executions().len(),
            "Recorded execution"
        );

        Ok(Some(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fake_service;

    #[tokio::test]
    async fn test_create_stores_command_verbatim() {
        let (service, store, _) = fake_service();

        let task = service
            .create(NewTask::new("Greeter", "alice", "echo hello"))
            .await
            .unwrap();

        assert_eq!(task.command, "echo hello");
        assert!(task.executions().is_empty());
        assert_eq!(store.find_by_id(task.id()).await.unwrap(), Some(task));
    }

    #[tokio::test]
    async fn test_create_rejects_unsafe_commands_without_persisting() {
        let (service, store, _) = fake_service();

        for command in ["rm -rf /", "sudo apt update", "xrmx", "", "   "] {
            let result = service.create(NewTask::new("bad", "mallory", command)).await;
            assert!(
                matches!(result, Err(ServiceError::Validation(CoreError::UnsafeCommand(_)))),
                "command {command:?} should be rejected"
            );
        }

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let (service, _, _) = fake_service();
        assert!(service.get_by_id(&TaskId::new("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_name_matches_any_case() {
        let (service, _, _) = fake_service();
        for name in ["Backup Job", "nightly-job", "JOBS", "cleanup"] {
            service.create(NewTask::new(name, "o", "echo x")).await.unwrap();
        }

        let mut names: Vec<String> = service
            .find_by_name("Job")
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["Backup Job", "JOBS", "nightly-job"]);
        assert!(service.find_by_name("absent").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop_success() {
        let (service, store, _) = fake_service();
        let task = service.create(NewTask::new("n", "o", "echo")).await.unwrap();

        service.delete(&TaskId::new("missing")).await.unwrap();
        assert_eq!(store.len().await, 1);

        service.delete(task.id()).await.unwrap();
        service.delete(task.id()).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_execute_appends_exactly_one_execution() {
        let (service, store, executor) = fake_service();
        let task = service.create(NewTask::new("n", "o", "echo hello")).await.unwrap();

        let first = service.execute(task.id()).await.unwrap().unwrap();
        assert_eq!(first.executions().len(), 1);
        let first_record = first.executions()[0].clone();

        let second = service.execute(task.id()).await.unwrap().unwrap();
        assert_eq!(second.executions().len(), 2);
        assert_eq!(second.executions()[0], first_record);

        let stored = store.find_by_id(task.id()).await.unwrap().unwrap();
        assert_eq!(stored, second);
        assert_eq!(executor.commands(), vec!["echo hello", "echo hello"]);
        for execution in stored.executions() {
            assert!(execution.start_time() <= execution.end_time());
        }
    }

    #[tokio::test]
    async fn test_execute_missing_runs_nothing() {
        let (service, store, executor) = fake_service();
        let task = service.create(NewTask::new("n", "o", "echo")).await.unwrap();

        let result = service.execute(&TaskId::new("missing")).await.unwrap();

        assert!(result.is_none());
        assert_eq!(executor.calls(), 0);
        let stored = store.find_by_id(task.id()).await.unwrap().unwrap();
        assert!(stored.executions().is_empty());
    }

    #[tokio::test]
    async fn test_execute_does_not_recheck_stored_command() {
        let (service, store, executor) = fake_service();
        let mut task = service.create(NewTask::new("n", "o", "echo")).await.unwrap();

        // A command that reached the store some other way is still run.
        task.command = "rm -rf /tmp/taskreg-never-run".to_string();
        store.save(task.clone()).await.unwrap();

        let executed = service.execute(task.id()).await.unwrap().unwrap();
        assert_eq!(executed.executions().len(), 1);
        assert_eq!(executor.calls(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_with_real_engine() {
        let store = Arc::new(crate::store::InMemoryTaskStore::new());
        let service = TaskService::new(store, Arc::new(taskreg_exec::CommandExecutor::new()));

        let hello = service.create(NewTask::new("hello", "o", "echo hello")).await.unwrap();
        let executed = service.execute(hello.id()).await.unwrap().unwrap();
        let output = executed.executions()[0].output();
        assert!(output.contains("hello\n"));
        assert!(output.ends_with("Process exited with code: 0"));

        let seven = service.create(NewTask::new("seven", "o", "exit 7")).await.unwrap();
        let executed = service.execute(seven.id()).await.unwrap().unwrap();
        assert!(executed.executions()[0]
            .output()
            .ends_with("Process exited with code: 7"));
    }
}
