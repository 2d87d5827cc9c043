//! Task handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use taskreg_core::{NewTask, TaskId};

use crate::http::responses::{FindQuery, TaskQuery};
use crate::service::ServiceError;
use crate::state::AppState;

/// Register a new task.
///
/// 201 with the stored task, or 400 if the command is rejected.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTask>,
) -> Result<Response, ServiceError> {
    let task = state.tasks.create(req).await?;
    Ok((StatusCode::CREATED, Json(task)).into_response())
}

/// List every task, or return one task when `?id=` is given (404 if absent).
pub async fn get_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskQuery>,
) -> Result<Response, ServiceError> {
    if let Some(id) = query.id {
        return Ok(match state.tasks.get_by_id(&TaskId::new(id)).await? {
            Some(task) => Json(task).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        });
    }

    let tasks = state.tasks.list_all().await?;
    Ok(Json(tasks).into_response())
}

/// Search tasks by name fragment. 404 when nothing matches.
pub async fn find_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FindQuery>,
) -> Result<Response, ServiceError> {
    let tasks = state.tasks.find_by_name(&query.name).await?;

    if tasks.is_empty() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }
    Ok(Json(tasks).into_response())
}

/// Delete a task. Always 204, whether or not it existed.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    if let Err(e) = state.tasks.delete(&TaskId::new(id.clone())).await {
        error!(task_id = %id, error = %e, "Failed to delete task");
    }
    StatusCode::NO_CONTENT
}

/// Run a task's command and return the task with the new execution. 404 if absent.
pub async fn execute_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ServiceError> {
    Ok(match state.tasks.execute(&TaskId::new(id)).await? {
        Some(task) => Json(task).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}
