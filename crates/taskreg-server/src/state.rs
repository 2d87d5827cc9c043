//! Shared application state.

use std::sync::Arc;

use crate::service::TaskService;

/// Shared application state handed to every HTTP handler.
pub struct AppState {
    /// Task operations.
    pub tasks: TaskService,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(tasks: TaskService) -> Arc<Self> {
        Arc::new(Self { tasks })
    }
}
