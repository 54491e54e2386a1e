//! Task creation form.

use crate::api::error::TITLE_REQUIRED;
use crate::client::{MutationOutcome, TaskApi, TaskCache};

/// Raw title and description fields with their validation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    title_error: Option<&'static str>,
}

impl TaskForm {
    /// Current title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Validation error attached to the title field.
    #[must_use]
    pub const fn title_error(&self) -> Option<&'static str> {
        self.title_error
    }

    /// Replaces the title input and clears its error.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.title_error = None;
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Checks the title, recording a field error when it is blank.
    pub fn validate(&mut self) -> bool {
        self.title_error = self.title.trim().is_empty().then_some(TITLE_REQUIRED);
        self.title_error.is_none()
    }

    /// Submits the form through `cache`.
    ///
    /// Returns `None` without contacting the cache when validation fails. The
    /// fields are cleared only after the task was created.
    pub async fn submit<A>(&mut self, cache: &TaskCache<A>) -> Option<MutationOutcome>
    where
        A: TaskApi + ?Sized,
    {
        if !self.validate() {
            return None;
        }
        let outcome = cache.submit_create(&self.title, &self.description).await;
        if outcome.is_applied() {
            *self = Self::default();
        }
        Some(outcome)
    }
}
