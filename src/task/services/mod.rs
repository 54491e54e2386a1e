//! Application services for task management.

mod catalogue;

pub use catalogue::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
