//! Test doubles shared by the service and HTTP tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use taskreg_core::Execution;
use taskreg_exec::Executor;

use crate::service::TaskService;
use crate::store::InMemoryTaskStore;

/// Executor that never spawns anything and records the commands it was given.
#[derive(Default)]
pub struct FakeExecutor {
    calls: AtomicUsize,
    commands: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl Executor for FakeExecutor {
    async fn run(&self, command: &str) -> Execution {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.commands.lock().unwrap().push(command.to_string());

        let start = Utc::now();
        let output = format!("run {n} of {command}\nProcess exited with code: 0");
        Execution::new(start, Utc::now(), output)
    }
}

/// A service over an empty in-memory store and a fake executor.
pub fn fake_service() -> (TaskService, Arc<InMemoryTaskStore>, Arc<FakeExecutor>) {
    let store = Arc::new(InMemoryTaskStore::new());
    let executor = Arc::new(FakeExecutor::default());
    let service = TaskService::new(store.clone(), executor.clone());
    (service, store, executor)
}
