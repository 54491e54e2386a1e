//! Process configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `HOST`: server host address (default: `0.0.0.0`)
//! - `PORT`: server port (default: `3000`)
//! - `STORAGE_MODE`: `memory` (default) | `postgres`
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when `STORAGE_MODE=postgres`)
//! - `DATABASE_POOL_SIZE`: maximum pooled connections (default: `8`)
//! - `RUST_LOG`: logging filter, read by [`crate::telemetry`]

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_POOL_SIZE: u32 = 8;

/// Backing engine for the task store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Process-local storage; contents are lost on exit.
    #[default]
    InMemory,
    /// `PostgreSQL` storage.
    Postgres,
}

impl FromStr for StorageMode {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in_memory" | "inmemory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(ConfigurationError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// `STORAGE_MODE` holds an unrecognised value.
    #[error("invalid STORAGE_MODE '{0}', expected memory or postgres")]
    InvalidStorageMode(String),

    /// `PORT` is not a valid port number.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// `DATABASE_POOL_SIZE` is not a positive integer.
    #[error("invalid DATABASE_POOL_SIZE '{0}', expected a positive integer")]
    InvalidPoolSize(String),

    /// `DATABASE_URL` is missing while `PostgreSQL` storage is selected.
    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,

    /// `HOST` and `PORT` do not form a socket address.
    #[error("invalid server address '{0}'")]
    InvalidAddress(String),
}

/// Runtime configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Selected task store engine.
    pub storage_mode: StorageMode,
    /// `PostgreSQL` connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled `PostgreSQL` connections.
    pub database_pool_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            storage_mode: StorageMode::default(),
            database_url: None,
            database_pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl AppConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when a variable holds an invalid value
    /// or `DATABASE_URL` is missing for `PostgreSQL` storage.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let host = read("HOST").unwrap_or(defaults.host);
        let port = match read("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigurationError::InvalidPort(value))?,
            None => defaults.port,
        };
        let storage_mode = match read("STORAGE_MODE") {
            Some(value) => value.parse()?,
            None => defaults.storage_mode,
        };
        let database_pool_size = match read("DATABASE_POOL_SIZE") {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigurationError::InvalidPoolSize(value)),
            },
            None => defaults.database_pool_size,
        };

        let config = Self {
            host,
            port,
            storage_mode,
            database_url: read("DATABASE_URL"),
            database_pool_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates cross-field requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingDatabaseUrl`] when `PostgreSQL`
    /// storage is selected without a connection URL.
    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        if matches!(self.storage_mode, StorageMode::Postgres) && self.database_url.is_none() {
            return Err(ConfigurationError::MissingDatabaseUrl);
        }
        Ok(())
    }

    /// Returns the listener address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidAddress`] when `host` is not an
    /// IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigurationError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|_| ConfigurationError::InvalidAddress(address))
    }
}
