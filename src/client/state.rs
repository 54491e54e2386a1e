//! Observable cache state and the in-flight flag guards.

use std::sync::{Arc, PoisonError, RwLock};

use crate::task::domain::{Task, TaskId};

/// Snapshot of the client-side task mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheState {
    tasks: Vec<Task>,
    is_loading: bool,
    is_creating: bool,
    deleting_id: Option<TaskId>,
    error: Option<String>,
}

impl Default for CacheState {
    /// A cache that has not loaded yet: no tasks, loading pending.
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            is_loading: true,
            is_creating: false,
            deleting_id: None,
            error: None,
        }
    }
}

impl CacheState {
    /// State after a successful load of `tasks`.
    #[must_use]
    pub fn loaded(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            is_loading: false,
            ..Self::default()
        }
    }

    /// State after a failed load.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Replaces the error message shown with this state.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Mirrored tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether a list request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether a create request is in flight.
    #[must_use]
    pub const fn is_creating(&self) -> bool {
        self.is_creating
    }

    /// Task whose delete request is in flight, if any.
    #[must_use]
    pub const fn deleting_id(&self) -> Option<TaskId> {
        self.deleting_id
    }

    /// Last user-facing error message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub(super) fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    pub(super) fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id() != id);
    }

    pub(super) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

pub(super) type SharedState = Arc<RwLock<CacheState>>;

/// Applies `update` to the shared state, recovering from a poisoned lock.
pub(super) fn write_state<T>(state: &SharedState, update: impl FnOnce(&mut CacheState) -> T) -> T {
    let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
    update(&mut guard)
}

/// Request kind tracked by an [`InFlight`] guard.
#[derive(Debug, Clone, Copy)]
pub(super) enum Activity {
    Loading,
    Creating,
    Deleting(TaskId),
}

/// Raises an in-flight flag on creation and lowers it on drop, so the flag is
/// cleared on every exit path including a dropped future.
pub(super) struct InFlight {
    state: SharedState,
    activity: Activity,
}

impl InFlight {
    /// Raises the flag for `activity` and clears the current error.
    pub(super) fn begin(state: &SharedState, activity: Activity) -> Self {
        write_state(state, |current| {
            match activity {
                Activity::Loading => current.is_loading = true,
                Activity::Creating => current.is_creating = true,
                Activity::Deleting(id) => current.deleting_id = Some(id),
            }
            current.error = None;
        });
        Self {
            state: Arc::clone(state),
            activity,
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let activity = self.activity;
        write_state(&self.state, |current| match activity {
            Activity::Loading => current.is_loading = false,
            Activity::Creating => current.is_creating = false,
            // A later delete may have replaced the marker; only clear our own.
            Activity::Deleting(id) => {
                if current.deleting_id == Some(id) {
                    current.deleting_id = None;
                }
            }
        });
    }
}
