//! Shared test helpers for `PostgreSQL` integration tests.

use std::env;
use std::sync::OnceLock;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, TestCustomizer};
use rstest::fixture;
use taskboard::task::adapters::postgres::PostgresTaskRepository;

/// Boxed error type used by fallible test helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL: &str = "TASKBOARD_TEST_DATABASE_URL";

/// SQL creating the task schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-15-000000_create_tasks/up.sql");

static SCHEMA: OnceLock<Result<(), String>> = OnceLock::new();

/// Returns the test database URL, if configured.
pub fn database_url() -> Option<String> {
    env::var(TEST_DATABASE_URL)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Applies the schema once per test process and commits it.
fn ensure_schema(url: &str) -> Result<(), BoxError> {
    SCHEMA
        .get_or_init(|| {
            let mut connection = PgConnection::establish(url).map_err(|err| err.to_string())?;
            connection
                .batch_execute(CREATE_SCHEMA_SQL)
                .map_err(|err| err.to_string())
        })
        .clone()
        .map_err(BoxError::from)
}

/// Builds a repository over a single connection held in an open test
/// transaction, so nothing it writes is committed.
///
/// # Errors
///
/// Returns an error if the schema cannot be applied or the pool cannot
/// connect.
pub fn transactional_repository(url: &str) -> Result<PostgresTaskRepository, BoxError> {
    ensure_schema(url)?;
    let pool = Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestCustomizer))
        .build(ConnectionManager::<PgConnection>::new(url))?;
    Ok(PostgresTaskRepository::new(pool))
}

/// Repository fixture; `None` when no test database is configured.
#[fixture]
pub fn repository() -> Result<Option<PostgresTaskRepository>, BoxError> {
    database_url()
        .map(|url| transactional_repository(&url))
        .transpose()
}
