//! Service layer for listing, creating, and deleting tasks.

use crate::task::{
    domain::{NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Both fields are optional at the schema level so that a missing title is
/// reported as a validation failure rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    /// Builds a request from raw form fields, trimming both and omitting a
    /// blank description.
    #[must_use]
    pub fn from_form(title: &str, description: &str) -> Self {
        let trimmed = description.trim();
        Self {
            title: Some(title.trim().to_owned()),
            description: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the raw title, if provided.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the raw description, if provided.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The targeted task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Stateless task operations over a repository.
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Creates a task from a request.
    ///
    /// The title is validated before the repository is touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is missing or
    /// blank, or [`TaskServiceError::Repository`] when the store fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title.unwrap_or_default())?;
        let description = TaskDescription::parse(request.description.as_deref());
        let new_task = NewTask::new(title, description, &*self.clock);
        Ok(self.repository.create(&new_task).await?)
    }

    /// Deletes a task after confirming that it exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// identifier, or [`TaskServiceError::Repository`] when the store fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TaskServiceError::NotFound(id));
        }
        self.repository.delete(id).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(missing) => TaskServiceError::NotFound(missing),
            other => TaskServiceError::Repository(other),
        })
    }
}
