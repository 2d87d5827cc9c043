//! TaskReg Server Library
//!
//! This crate wires the TaskReg core together: the task store contract and
//! its implementations, the task service that composes the safety gate,
//! execution engine and store, and the HTTP boundary that exposes it.

pub mod config;
pub mod http;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{Config, StoreKind};
pub use service::{ServiceError, TaskService};
pub use state::AppState;
pub use store::{InMemoryTaskStore, JsonFileTaskStore, StoreError, TaskStore};
