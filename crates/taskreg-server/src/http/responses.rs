//! HTTP request and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::service::ServiceError;

// ============================================================================
// Query types
// ============================================================================

/// Query for `GET /api/tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct TaskQuery {
    /// Return just this task instead of the full list.
    pub id: Option<String>,
}

/// Query for `GET /api/tasks/find`.
#[derive(Debug, Deserialize)]
pub struct FindQuery {
    /// Name fragment, matched case-insensitively.
    pub name: String,
}

// ============================================================================
// Error types
// ============================================================================

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Store(e) => {
                error!(error = %e, "Task store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
