//! Presentation state and page rendering.
//!
//! Components here hold only view state (form fields, open delete
//! confirmations) and forward intents to the [`TaskCache`](crate::client::TaskCache).
//! Rendering reads a [`CacheState`](crate::client::CacheState) snapshot and
//! never mutates it.

mod confirm;
mod form;
mod page;

pub use confirm::DeleteConfirmations;
pub use form::TaskForm;
pub use page::{RenderError, render_page};
