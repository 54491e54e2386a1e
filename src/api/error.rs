//! API error handling.
//!
//! Service failures are converted here into envelope responses. Store
//! failures are logged with their detail and answered with a generic
//! message; nothing from the store is echoed to the caller.

use std::fmt;

use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::envelope::ApiEnvelope;
use crate::task::{domain::TaskDomainError, services::TaskServiceError};

/// Message returned when a create request has no usable title.
pub const TITLE_REQUIRED: &str = "Task title is required";
/// Message returned when a path segment is not a task identifier.
pub const INVALID_TASK_ID: &str = "Invalid task ID";
/// Message returned when the targeted task does not exist.
pub const TASK_NOT_FOUND: &str = "Task not found";
/// Message returned when a create body is not valid JSON for the schema.
pub const INVALID_BODY: &str = "Invalid request body";

/// API operation, used to pick the failure message and label logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOperation {
    /// `GET /api/tasks`.
    List,
    /// `POST /api/tasks`.
    Create,
    /// `DELETE /api/tasks/{id}`.
    Delete,
    /// `GET /`.
    RenderPage,
}

impl TaskOperation {
    /// Returns the operation name used in log records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::RenderPage => "render_page",
        }
    }

    /// Returns the generic message sent when the operation fails unexpectedly.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to fetch tasks",
            Self::Create => "Failed to create task",
            Self::Delete => "Failed to delete task",
            Self::RenderPage => "Failed to render page",
        }
    }
}

/// Error response: a status code with an envelope error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: StatusCode,
    /// User-facing error message.
    pub message: String,
}

impl ApiError {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found response.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 response with the operation's generic failure message.
    #[must_use]
    pub fn internal(operation: TaskOperation) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            operation.failure_message(),
        )
    }

    /// Maps a service failure for the given operation.
    #[must_use]
    pub fn from_service(operation: TaskOperation, error: TaskServiceError) -> Self {
        match error {
            TaskServiceError::Validation(domain_error) => {
                tracing::debug!(
                    operation = operation.as_str(),
                    error = %domain_error,
                    "rejected invalid task input"
                );
                Self::from_validation(&domain_error)
            }
            TaskServiceError::NotFound(id) => {
                tracing::debug!(operation = operation.as_str(), %id, "task not found");
                Self::not_found(TASK_NOT_FOUND)
            }
            TaskServiceError::Repository(repository_error) => {
                tracing::error!(
                    operation = operation.as_str(),
                    error = %repository_error,
                    "task store failure"
                );
                Self::internal(operation)
            }
        }
    }

    /// Maps a domain validation failure to a 400 response.
    #[must_use]
    pub fn from_validation(error: &TaskDomainError) -> Self {
        match error {
            TaskDomainError::EmptyTitle => Self::bad_request(TITLE_REQUIRED),
            TaskDomainError::InvalidTaskId(_) => Self::bad_request(INVALID_TASK_ID),
            // Raised only by strict description parsing; request handling
            // normalises blank descriptions to `None` first.
            TaskDomainError::BlankDescription => Self::bad_request(INVALID_BODY),
        }
    }

    /// Maps a rejected JSON or form body to a 400 response.
    #[must_use]
    pub fn malformed_body(rejection: &impl fmt::Display) -> Self {
        tracing::debug!(error = %rejection, "rejected malformed request body");
        Self::bad_request(INVALID_BODY)
    }

    /// Maps a path segment axum could not extract, such as one that is not
    /// valid UTF-8, to a 400 response.
    #[must_use]
    pub fn invalid_path(rejection: &PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected task path");
        Self::bad_request(INVALID_TASK_ID)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiEnvelope::<()>::failure(self.message))).into_response()
    }
}
