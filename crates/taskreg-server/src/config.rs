//! Server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;

use crate::store::{InMemoryTaskStore, JsonFileTaskStore, StoreError, TaskStore};

/// Which task store backs the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Tasks live only as long as the process.
    #[default]
    Memory,
    /// Tasks are kept in a JSON document file.
    File,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address.
    pub http_bind_addr: String,

    /// Store backend.
    pub store: StoreKind,

    /// Document file used by the file store.
    pub data_file: PathBuf,

    /// Working directory for executed commands (inherited when unset).
    pub working_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_bind_addr: "127.0.0.1:8080".to_string(),
            store: StoreKind::Memory,
            data_file: PathBuf::from("taskreg-data.json"),
            working_dir: None,
        }
    }
}

impl Config {
    /// Open the configured store.
    pub async fn open_store(&self) -> Result<Arc<dyn TaskStore>, StoreError> {
        match self.store {
            StoreKind::Memory => Ok(Arc::new(InMemoryTaskStore::new())),
            StoreKind::File => Ok(Arc::new(JsonFileTaskStore::open(&self.data_file).await?)),
        }
    }
}
