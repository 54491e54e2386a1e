//! Route table for the task server.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_task, delete_task, health_check, list_tasks};
use super::pages::{confirm_delete, index, submit_task_form};

/// Builds the application router with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_task_form))
        .route("/tasks/{id}/delete", post(confirm_delete))
        .route("/health", get(health_check))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", delete(delete_task))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
