//! HTTP adapter for the task API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::transport::{ClientResult, TaskApi};
use crate::api::ApiEnvelope;
use crate::task::{
    domain::{Task, TaskId},
    services::CreateTaskRequest,
};

/// Task API client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskApi {
    /// Creates a client for the server at `base_url`, e.g.
    /// `http://127.0.0.1:3000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let trimmed = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client,
            base_url: trimmed,
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<ApiEnvelope<T>> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ClientResult<ApiEnvelope<Vec<Task>>> {
        let response = self.client.get(self.tasks_url()).send().await?;
        decode(response).await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<ApiEnvelope<Task>> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_task(&self, id: TaskId) -> ClientResult<ApiEnvelope<()>> {
        let url = format!("{}/{id}", self.tasks_url());
        let response = self.client.delete(url).send().await?;
        decode(response).await
    }
}
