//! Per-task delete confirmation prompts.

use std::collections::BTreeSet;

use crate::client::{MutationOutcome, TaskApi, TaskCache};
use crate::task::domain::TaskId;

/// Tasks whose delete confirmation prompt is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmations {
    open: BTreeSet<TaskId>,
}

impl DeleteConfirmations {
    /// Opens the prompt for `id`.
    pub fn request(&mut self, id: TaskId) {
        self.open.insert(id);
    }

    /// Closes the prompt for `id` without deleting.
    pub fn cancel(&mut self, id: TaskId) {
        self.open.remove(&id);
    }

    /// Whether the prompt for `id` is open.
    #[must_use]
    pub fn is_open(&self, id: TaskId) -> bool {
        self.open.contains(&id)
    }

    /// Confirms the open prompt for `id` and deletes the task.
    ///
    /// The prompt closes when the delete succeeds and stays open otherwise so
    /// the user can try again. Returns `None` when no prompt is open for `id`.
    pub async fn confirm<A>(&mut self, cache: &TaskCache<A>, id: TaskId) -> Option<MutationOutcome>
    where
        A: TaskApi + ?Sized,
    {
        if !self.is_open(id) {
            return None;
        }
        let outcome = cache.submit_delete(id).await;
        if outcome.is_applied() {
            self.open.remove(&id);
        }
        Some(outcome)
    }
}
