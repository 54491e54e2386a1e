//! Task store construction for the process entry point.
//!
//! The entry point owns the returned handle: it is opened once at startup,
//! injected into the HTTP state, and dropped after the server shuts down.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

use super::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository};
use crate::config::{AppConfig, StorageMode};
use crate::task::ports::{TaskRepository, TaskRepositoryError};

/// Errors raised while opening the task store.
#[derive(Debug, Error)]
pub enum StoreInitError {
    /// `PostgreSQL` storage was selected without a connection URL.
    #[error("DATABASE_URL is required for postgres storage")]
    MissingDatabaseUrl,

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),

    /// The schema bootstrap failed.
    #[error("failed to prepare task schema: {0}")]
    Schema(#[from] TaskRepositoryError),
}

/// Opens the task store selected by `config`.
///
/// # Errors
///
/// Returns [`StoreInitError`] when the `PostgreSQL` pool cannot be created or
/// the schema cannot be applied.
pub async fn open_task_store(
    config: &AppConfig,
) -> Result<Arc<dyn TaskRepository>, StoreInitError> {
    match config.storage_mode {
        StorageMode::InMemory => {
            tracing::info!("opening in-memory task store");
            Ok(Arc::new(InMemoryTaskRepository::new()))
        }
        StorageMode::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(StoreInitError::MissingDatabaseUrl)?;
            let manager = ConnectionManager::<PgConnection>::new(url);
            let pool = Pool::builder()
                .max_size(config.database_pool_size)
                .build(manager)?;
            let repository = PostgresTaskRepository::new(pool);
            repository.bootstrap_schema().await?;
            tracing::info!(
                pool_size = config.database_pool_size,
                "opened postgres task store"
            );
            Ok(Arc::new(repository))
        }
    }
}
