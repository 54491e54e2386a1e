//! HTTP handlers for task endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use mockable::DefaultClock;
use serde::Serialize;

use super::{
    envelope::ApiEnvelope,
    error::{ApiError, TaskOperation},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskService},
};

/// Message returned after a successful delete.
pub const TASK_DELETED: &str = "Task deleted successfully";

/// Task service type held by the HTTP state.
pub type SharedTaskService = TaskService<dyn TaskRepository, DefaultClock>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task operations over the injected store.
    pub service: SharedTaskService,
}

impl AppState {
    /// Creates state around an opened task store.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            service: TaskService::new(repository, Arc::new(DefaultClock)),
        }
    }
}

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
}

/// `GET /health`.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /api/tasks`: lists every task, newest first.
///
/// # Errors
///
/// Returns a 500 envelope when the store fails.
pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<Task>>>, ApiError> {
    let tasks = state
        .service
        .list()
        .await
        .map_err(|error| ApiError::from_service(TaskOperation::List, error))?;
    Ok(Json(ApiEnvelope::data(tasks)))
}

/// `POST /api/tasks`: creates a task.
///
/// # Request Body
///
/// ```json
/// { "title": "Buy milk", "description": "Optional description" }
/// ```
///
/// # Errors
///
/// Returns a 400 envelope for a malformed body or a missing/blank title, and
/// a 500 envelope when the store fails.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<Task>>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::malformed_body(&rejection))?;
    let task = state
        .service
        .create(request)
        .await
        .map_err(|error| ApiError::from_service(TaskOperation::Create, error))?;
    tracing::info!(id = %task.id(), "task created");
    Ok((StatusCode::CREATED, Json(ApiEnvelope::data(task))))
}

/// `DELETE /api/tasks/{id}`: deletes a task.
///
/// # Errors
///
/// Returns a 400 envelope when `id` is not an integer, 404 when the task does
/// not exist, and 500 when the store fails.
pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    let id = parse_task_id(path)?;
    state
        .service
        .delete(id)
        .await
        .map_err(|error| ApiError::from_service(TaskOperation::Delete, error))?;
    tracing::info!(%id, "task deleted");
    Ok(Json(ApiEnvelope::message(TASK_DELETED)))
}

/// Extracts a task identifier from the `{id}` path segment.
pub(super) fn parse_task_id(path: Result<Path<String>, PathRejection>) -> Result<TaskId, ApiError> {
    let Path(raw_id) = path.map_err(|rejection| ApiError::invalid_path(&rejection))?;
    raw_id.parse::<TaskId>().map_err(|error| {
        tracing::debug!(%error, "rejected task identifier");
        ApiError::from_validation(&error)
    })
}
