//! Task store that can be switched into a failing state.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// In-memory store whose operations all fail while `failing` is set.
#[derive(Debug, Default)]
pub struct FlakyTaskRepository {
    inner: InMemoryTaskRepository,
    failing: AtomicBool,
}

impl FlakyTaskRepository {
    /// Makes every subsequent operation fail (`true`) or succeed (`false`).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> TaskRepositoryResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TaskRepositoryError::persistence(std::io::Error::other(
                "store unavailable",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FlakyTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.check()?;
        self.inner.list_all().await
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        self.check()?;
        self.inner.create(task).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.check()?;
        self.inner.find_by_id(id).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.check()?;
        self.inner.delete(id).await
    }
}
