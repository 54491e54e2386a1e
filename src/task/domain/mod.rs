//! Domain model for task tracking.
//!
//! A task is a short titled note with an optional description. The domain
//! owns title and description normalisation so that every layer above it
//! works with already-trimmed values.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{NewTask, PersistedTaskData, Task, TaskDescription, TaskTitle};
