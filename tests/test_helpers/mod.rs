//! Shared helpers for integration tests.

pub mod env;
pub mod flaky;
pub mod router_api;

pub use env::EnvVarGuard;
pub use flaky::FlakyTaskRepository;
pub use router_api::RouterTaskApi;
