//! Shared world state for task API scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::fixture;
use serde_json::Value;
use taskboard::api::{AppState, build_router};
use taskboard::task::ports::TaskRepository;
use tower::ServiceExt;

use crate::test_helpers::FlakyTaskRepository;

/// Scenario world: a router over a store that can be made to fail.
pub struct ApiWorld {
    pub store: Arc<FlakyTaskRepository>,
    pub router: Router,
    /// Identifiers of tasks created during the scenario, keyed by title.
    pub created: HashMap<String, i64>,
    pub last_response: Option<(StatusCode, Value)>,
}

impl ApiWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(FlakyTaskRepository::default());
        let handle: Arc<dyn TaskRepository> = Arc::clone(&store) as Arc<dyn TaskRepository>;
        let router = build_router(AppState::new(handle));
        Self {
            store,
            router,
            created: HashMap::new(),
            last_response: None,
        }
    }

    /// Sends a request and records the decoded response.
    pub async fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(), eyre::Report> {
        let mut builder = Request::builder().method(method).uri(uri);
        let payload = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json)?)
            }
            None => Body::empty(),
        };
        let response = self.router.clone().oneshot(builder.body(payload)?).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        self.last_response = Some((status, serde_json::from_slice(&bytes)?));
        Ok(())
    }

    /// Returns the last recorded response.
    pub fn response(&self) -> Result<&(StatusCode, Value), eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request was sent in this scenario"))
    }
}

impl Default for ApiWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ApiWorld {
    ApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
