//! HTTP server for the task registry.
//!
//! Provides endpoints for:
//! - Creating tasks (`PUT /api/tasks`)
//! - Listing tasks or fetching one by id (`GET /api/tasks[?id=]`)
//! - Searching by name (`GET /api/tasks/find?name=`)
//! - Deleting tasks (`DELETE /api/tasks/:id`)
//! - Executing tasks (`PUT /api/tasks/execute/:id`)
//! - Health check (`/health`)

use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod handlers;
pub mod responses;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route(
            "/api/tasks",
            put(handlers::create_task).get(handlers::get_tasks),
        )
        .route("/api/tasks/find", get(handlers::find_tasks))
        .route("/api/tasks/execute/:id", put(handlers::execute_task))
        .route("/api/tasks/:id", delete(handlers::delete_task))
        // Observability routes
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
