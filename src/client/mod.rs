//! Client-side task cache.
//!
//! [`TaskCache`] mirrors the server's task list together with the transient
//! flags a page needs (loading, creating, deleting, last error). It talks to
//! the server through the [`TaskApi`] port; [`HttpTaskApi`] is the HTTP
//! adapter.

mod cache;
mod http;
mod state;
mod transport;

pub use cache::{
    CONNECT_FAILED, CREATE_FAILED, DELETE_FAILED, FETCH_FAILED, MutationOutcome, TaskCache,
};
pub use http::HttpTaskApi;
pub use state::CacheState;
#[cfg(test)]
pub use transport::MockTaskApi;
pub use transport::{ClientError, ClientResult, TaskApi};
