//! Page rendering from a cache snapshot.

use chrono::{DateTime, Utc};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

use super::{DeleteConfirmations, TaskForm};
use crate::client::CacheState;
use crate::task::domain::{Task, TaskDescription};

const PAGE_TEMPLATE: &str = "page.html";
const TASK_ITEM_TEMPLATE: &str = "task_item.html";
const DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Errors raised while rendering the page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to compile or render.
    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

#[derive(Debug, Serialize)]
struct PageView<'a> {
    error: Option<&'a str>,
    is_loading: bool,
    form: FormView<'a>,
    tasks: Vec<TaskItemView<'a>>,
}

#[derive(Debug, Serialize)]
struct FormView<'a> {
    title: &'a str,
    description: &'a str,
    title_error: Option<&'a str>,
    is_creating: bool,
}

#[derive(Debug, Serialize)]
struct TaskItemView<'a> {
    id: i64,
    title: &'a str,
    description: Option<&'a str>,
    created: String,
    updated: Option<String>,
    is_deleting: bool,
    is_confirming: bool,
}

impl<'a> TaskItemView<'a> {
    fn new(task: &'a Task, state: &CacheState, confirmations: &DeleteConfirmations) -> Self {
        let updated = (task.updated_at() != task.created_at()).then(|| format_date(task.updated_at()));
        Self {
            id: task.id().value(),
            title: task.title().as_str(),
            description: task.description().map(TaskDescription::as_str),
            created: format_date(task.created_at()),
            updated,
            is_deleting: state.deleting_id() == Some(task.id()),
            is_confirming: confirmations.is_open(task.id()),
        }
    }
}

fn format_date(value: DateTime<Utc>) -> String {
    value.format(DATE_FORMAT).to_string()
}

fn environment() -> Result<Environment<'static>, RenderError> {
    let mut environment = Environment::new();
    environment.add_template(PAGE_TEMPLATE, include_str!("templates/page.html"))?;
    environment.add_template(TASK_ITEM_TEMPLATE, include_str!("templates/task_item.html"))?;
    Ok(environment)
}

/// Renders the task page: error banner, creation form, and task list.
///
/// Output is HTML-escaped.
///
/// # Errors
///
/// Returns [`RenderError::Template`] when a template fails to render.
pub fn render_page(
    state: &CacheState,
    form: &TaskForm,
    confirmations: &DeleteConfirmations,
) -> Result<String, RenderError> {
    let view = PageView {
        error: state.error(),
        is_loading: state.is_loading(),
        form: FormView {
            title: form.title(),
            description: form.description(),
            title_error: form.title_error(),
            is_creating: state.is_creating(),
        },
        tasks: state
            .tasks()
            .iter()
            .map(|task| TaskItemView::new(task, state, confirmations))
            .collect(),
    };
    let environment = environment()?;
    Ok(environment.get_template(PAGE_TEMPLATE)?.render(view)?)
}
