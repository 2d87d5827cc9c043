//! JSON document-file task store.
//!
//! The whole document set is held in memory and rewritten to disk after every
//! mutation. Writes go to a sibling temp file that is then renamed over the
//! target, so a crash never leaves a half-written document file behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use taskreg_core::{NewTask, Task, TaskId};

use super::{Documents, StoreError, TaskStore};

/// Task store persisted as a JSON array of task documents.
#[derive(Debug)]
pub struct JsonFileTaskStore {
    path: PathBuf,
    docs: RwLock<Documents>,
}

impl JsonFileTaskStore {
    /// Open the store at `path`, loading existing documents.
    ///
    /// A missing file is treated as an empty store and is created on the
    /// first write.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let tasks: Vec<Task> = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), tasks = tasks.len(), "Opened task document file");

        Ok(Self {
            path,
            docs: RwLock::new(Documents::from_tasks(tasks)),
        })
    }

    /// Path of the backing document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document set to disk. Callers hold the write lock so
    /// concurrent flushes cannot interleave, and only commit `docs` to memory
    /// once this returns `Ok`.
    async fn flush(&self, docs: &Documents) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(docs.as_slice())?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Flushed task documents");
        Ok(())
    }
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn insert(&self, new: NewTask) -> Result<Task, StoreError> {
        let mut docs = self.docs.write().await;
        let mut next = docs.clone();
        let task = next.insert(new);
        self.flush(&next).await?;
        *docs = next;
        Ok(task)
    }

    async fn save(&self, task: Task) -> Result<Task, StoreError> {
        let mut docs = self.docs.write().await;
        let mut next = docs.clone();
        next.upsert(task.clone());
        self.flush(&next).await?;
        *docs = next;
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
        let mut docs = self.docs.write().await;
        let mut next = docs.clone();
        if next.remove(id) {
            self.flush(&next).await?;
            *docs = next;
        }
        Ok(())
    }
}
