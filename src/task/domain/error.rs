//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be blank")]
    BlankDescription,

    /// The task identifier is not an integer.
    #[error("invalid task identifier '{0}', expected an integer")]
    InvalidTaskId(String),
}
