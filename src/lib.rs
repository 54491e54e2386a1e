//! Taskboard: a single-user task tracker.
//!
//! The crate serves a small JSON API over a task store and ships the
//! client-side cache that keeps a task list in step with that API.
//!
//! # Architecture
//!
//! The task module follows hexagonal architecture principles:
//!
//! - **Domain**: validated task records with no infrastructure dependencies
//! - **Ports**: the [`task::ports::TaskRepository`] trait
//! - **Adapters**: in-memory and `PostgreSQL` stores
//! - **Services**: list, create, and delete over any store
//!
//! # Modules
//!
//! - [`task`]: task model, store port, adapters, and service
//! - [`api`]: HTTP endpoints and the response envelope
//! - [`client`]: client-side task cache and its HTTP transport
//! - [`presentation`]: form state, delete prompts, and page rendering
//! - [`config`]: environment configuration
//! - [`telemetry`]: tracing setup

pub mod api;
pub mod client;
pub mod config;
pub mod presentation;
pub mod task;
pub mod telemetry;
