//! HTTP API for task management.
//!
//! Every endpoint answers with the uniform [`ApiEnvelope`]; callers branch on
//! its `success` flag, while status codes are still set (200/201/400/404/500).
//! The HTML page at `/` and its form submissions live in [`pages`].

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;

pub use envelope::ApiEnvelope;
pub use error::{ApiError, TaskOperation};
pub use handlers::{AppState, SharedTaskService};
pub use router::build_router;

#[cfg(test)]
mod tests;
