//! Port through which the cache reaches the task API.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::ApiEnvelope;
use crate::task::{
    domain::{Task, TaskId},
    services::CreateTaskRequest,
};

/// Failures below the envelope level: the request never produced a
/// decodable response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not a task envelope.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for task API calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Task API as seen from the client.
///
/// Implementations return the server's envelope whatever the HTTP status;
/// the cache branches on the envelope's `success` flag.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetches every task, newest first.
    async fn list_tasks(&self) -> ClientResult<ApiEnvelope<Vec<Task>>>;

    /// Submits a new task.
    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<ApiEnvelope<Task>>;

    /// Deletes a task by identifier.
    async fn delete_task(&self, id: TaskId) -> ClientResult<ApiEnvelope<()>>;
}
