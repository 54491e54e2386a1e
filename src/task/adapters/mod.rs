//! Adapter implementations of the task repository port.

pub mod factory;
pub mod memory;
pub mod postgres;

pub use factory::{StoreInitError, open_task_store};
