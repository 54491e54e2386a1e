//! Task API client that calls the router in-process.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use taskboard::{
    api::ApiEnvelope,
    client::{ClientResult, TaskApi},
    task::{
        domain::{Task, TaskId},
        services::CreateTaskRequest,
    },
};
use tower::ServiceExt;

/// [`TaskApi`] implementation that sends each request through `oneshot`.
#[derive(Clone)]
pub struct RouterTaskApi {
    router: Router,
}

impl RouterTaskApi {
    /// Wraps a built router.
    pub const fn new(router: Router) -> Self {
        Self { router }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<ApiEnvelope<T>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, Body::from))
            .expect("request should build");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("in-process body should be readable")
            .to_bytes();
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TaskApi for RouterTaskApi {
    async fn list_tasks(&self) -> ClientResult<ApiEnvelope<Vec<Task>>> {
        self.call(Method::GET, "/api/tasks", None).await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<ApiEnvelope<Task>> {
        let body = serde_json::to_vec(request)?;
        self.call(Method::POST, "/api/tasks", Some(body)).await
    }

    async fn delete_task(&self, id: TaskId) -> ClientResult<ApiEnvelope<()>> {
        self.call(Method::DELETE, &format!("/api/tasks/{id}"), None)
            .await
    }
}
