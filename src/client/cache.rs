//! Task cache operations: refresh, create, delete, and error dismissal.

use std::sync::{
    Arc, PoisonError, RwLock,
    atomic::{AtomicBool, Ordering},
};

use super::state::{Activity, CacheState, InFlight, SharedState, write_state};
use super::transport::TaskApi;
use crate::task::{domain::TaskId, services::CreateTaskRequest};

/// Fallback error when a list request fails without a message.
pub const FETCH_FAILED: &str = "Failed to fetch tasks";
/// Fallback error when a create request fails without a message.
pub const CREATE_FAILED: &str = "Failed to create task";
/// Fallback error when a delete request fails without a message.
pub const DELETE_FAILED: &str = "Failed to delete task";
/// Error shown when a list request never reaches the server.
pub const CONNECT_FAILED: &str = "Failed to connect to the server";

/// Result of a create or delete submitted through the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server confirmed the change and the mirror was updated.
    Applied,
    /// The request failed; the mirror is unchanged and the error is set.
    Failed,
}

impl MutationOutcome {
    /// Whether the mutation was applied.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Client-side mirror of the server's task list.
///
/// The mirror only changes after the server confirms a mutation. Create and
/// delete each track their own in-flight flag, so both may run at once.
pub struct TaskCache<A>
where
    A: TaskApi + ?Sized,
{
    api: Arc<A>,
    state: SharedState,
    activated: AtomicBool,
}

impl<A> TaskCache<A>
where
    A: TaskApi + ?Sized,
{
    /// Creates an inactive cache over `api`.
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(CacheState::default())),
            activated: AtomicBool::new(false),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> CacheState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs the initial refresh. Later calls do nothing.
    pub async fn activate(&self) {
        if self.activated.swap(true, Ordering::AcqRel) {
            return;
        }
        self.refresh().await;
    }

    /// Reloads the task list from the server.
    ///
    /// On failure the existing tasks are kept and the error is set.
    pub async fn refresh(&self) {
        let _in_flight = InFlight::begin(&self.state, Activity::Loading);
        let error = match self.api.list_tasks().await {
            Ok(envelope) => match envelope.into_result() {
                Ok(tasks) => {
                    write_state(&self.state, |state| state.replace_tasks(tasks));
                    return;
                }
                Err(message) => message.unwrap_or_else(|| FETCH_FAILED.to_owned()),
            },
            Err(error) => {
                tracing::warn!(%error, "task list request failed");
                CONNECT_FAILED.to_owned()
            }
        };
        write_state(&self.state, |state| state.set_error(Some(error)));
    }

    /// Retries loading after a failure.
    pub async fn retry(&self) {
        self.refresh().await;
    }

    /// Creates a task from raw form input and prepends it on success.
    pub async fn submit_create(&self, title: &str, description: &str) -> MutationOutcome {
        let _in_flight = InFlight::begin(&self.state, Activity::Creating);
        let request = CreateTaskRequest::from_form(title, description);
        let error = match self.api.create_task(&request).await {
            Ok(envelope) => match envelope.into_result() {
                Ok(task) => {
                    write_state(&self.state, |state| state.prepend(task));
                    return MutationOutcome::Applied;
                }
                Err(message) => message,
            },
            Err(error) => {
                tracing::warn!(%error, "create task request failed");
                None
            }
        };
        self.fail(error.unwrap_or_else(|| CREATE_FAILED.to_owned()))
    }

    /// Deletes a task and drops it from the mirror on success.
    pub async fn submit_delete(&self, id: TaskId) -> MutationOutcome {
        let _in_flight = InFlight::begin(&self.state, Activity::Deleting(id));
        let error = match self.api.delete_task(id).await {
            Ok(envelope) if envelope.success => {
                write_state(&self.state, |state| state.remove(id));
                return MutationOutcome::Applied;
            }
            Ok(envelope) => envelope.error,
            Err(error) => {
                tracing::warn!(%error, %id, "delete task request failed");
                None
            }
        };
        self.fail(error.unwrap_or_else(|| DELETE_FAILED.to_owned()))
    }

    /// Clears the current error without contacting the server.
    pub fn dismiss_error(&self) {
        write_state(&self.state, |state| state.set_error(None));
    }

    fn fail(&self, message: String) -> MutationOutcome {
        write_state(&self.state, |state| state.set_error(Some(message)));
        MutationOutcome::Failed
    }
}
