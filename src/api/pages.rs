//! Server-rendered task page and its form submissions.
//!
//! The page works without scripting: the creation form posts to `/`, a delete
//! prompt is opened with `/?confirm={id}`, and a confirmed delete posts to
//! `/tasks/{id}/delete`. Successful submissions redirect back to `/`; failed
//! ones re-render the page with the input kept and the error shown.

use axum::{
    Form,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::error::{ApiError, TaskOperation};
use super::handlers::{AppState, parse_task_id};
use crate::client::CacheState;
use crate::presentation::{DeleteConfirmations, TaskForm, render_page};
use crate::task::{
    domain::TaskId,
    services::{CreateTaskRequest, TaskServiceError},
};

/// Query parameters accepted by `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Task whose delete prompt should be open.
    confirm: Option<String>,
}

/// What a re-rendered page reports besides the stored tasks.
struct PageOutcome {
    status: StatusCode,
    banner: Option<String>,
}

impl PageOutcome {
    const fn ok() -> Self {
        Self {
            status: StatusCode::OK,
            banner: None,
        }
    }

    fn failed(error: ApiError) -> Self {
        Self {
            status: error.status,
            banner: Some(error.message),
        }
    }
}

async fn page(
    state: &AppState,
    form: &TaskForm,
    confirmations: &DeleteConfirmations,
    outcome: PageOutcome,
) -> Result<Response, ApiError> {
    let listed = match state.service.list().await {
        Ok(tasks) => CacheState::loaded(tasks),
        Err(error) => CacheState::failed(ApiError::from_service(TaskOperation::List, error).message),
    };
    let cache_state = match outcome.banner {
        Some(message) => listed.with_error(message),
        None => listed,
    };
    let html = render_page(&cache_state, form, confirmations).map_err(|error| {
        tracing::error!(%error, "failed to render task page");
        ApiError::internal(TaskOperation::RenderPage)
    })?;
    Ok((outcome.status, Html(html)).into_response())
}

/// `GET /`: renders the task page populated from the store.
///
/// A store failure is shown in the page's error banner rather than failing
/// the request. `?confirm={id}` opens the delete prompt for that task; an
/// unparsable value is ignored.
///
/// # Errors
///
/// Returns a 500 envelope when the page template cannot be rendered.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let mut confirmations = DeleteConfirmations::default();
    if let Some(id) = params
        .confirm
        .as_deref()
        .and_then(|raw| raw.parse::<TaskId>().ok())
    {
        confirmations.request(id);
    }
    page(&state, &TaskForm::default(), &confirmations, PageOutcome::ok()).await
}

/// `POST /`: creates a task from the page's form fields.
///
/// Redirects to `/` once the task is stored. A blank title re-renders the
/// form with its field error (400); a store failure re-renders it with the
/// error banner (500). The submitted input is kept in both cases.
///
/// # Errors
///
/// Returns a 400 envelope when the body is not form-encoded, and a 500
/// envelope when the page cannot be rendered.
pub async fn submit_task_form(
    State(state): State<AppState>,
    payload: Result<Form<CreateTaskRequest>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(request) = payload.map_err(|rejection| ApiError::malformed_body(&rejection))?;
    let mut form = TaskForm::default();
    form.set_title(request.title().unwrap_or_default());
    form.set_description(request.description().unwrap_or_default());

    match state.service.create(request).await {
        Ok(task) => {
            tracing::info!(id = %task.id(), "task created from page");
            Ok(Redirect::to("/").into_response())
        }
        Err(TaskServiceError::Validation(error)) => {
            tracing::debug!(%error, "rejected task form");
            form.validate();
            let outcome = PageOutcome {
                status: StatusCode::BAD_REQUEST,
                banner: None,
            };
            page(&state, &form, &DeleteConfirmations::default(), outcome).await
        }
        Err(error) => {
            let outcome = PageOutcome::failed(ApiError::from_service(TaskOperation::Create, error));
            page(&state, &form, &DeleteConfirmations::default(), outcome).await
        }
    }
}

/// `POST /tasks/{id}/delete`: deletes a task after the page's prompt was
/// confirmed.
///
/// Redirects to `/` once the task is gone. Any failure re-renders the page
/// with the error banner, and the prompt stays open for a valid identifier.
///
/// # Errors
///
/// Returns a 500 envelope when the page cannot be rendered.
pub async fn confirm_delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let form = TaskForm::default();
    let id = match parse_task_id(path) {
        Ok(id) => id,
        Err(error) => {
            let outcome = PageOutcome::failed(error);
            return page(&state, &form, &DeleteConfirmations::default(), outcome).await;
        }
    };

    match state.service.delete(id).await {
        Ok(()) => {
            tracing::info!(%id, "task deleted from page");
            Ok(Redirect::to("/").into_response())
        }
        Err(error) => {
            let mut confirmations = DeleteConfirmations::default();
            confirmations.request(id);
            let outcome = PageOutcome::failed(ApiError::from_service(TaskOperation::Delete, error));
            page(&state, &form, &confirmations, outcome).await
        }
    }
}
