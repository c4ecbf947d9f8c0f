use std::{ env, str::FromStr, time::Duration };

use thiserror::Error;
use diesel::{ PgConnection, r2d2::{ Pool, ConnectionManager, PoolError as R2D2Error } };
use serde::Deserialize;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const DEFAULT_MAX_CONNECTIONS: u32 = 15;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")] Config(String),

    #[error("Connection pool error: {0}")] Pool(#[from] R2D2Error),

    #[error("Migration error: {0}")] Migration(String),
}

/// Which `PostStore` implementation the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::Config(format!("Unknown STORE_BACKEND: {}", other))),
        }
    }
}

/*
The pool is not part of DatabaseConfig: the in-memory backend never opens a connection,
so the pool is only built on demand through `DatabaseConfig::build_pool`.
*/

#[derive(Debug, Deserialize, Clone)]
pub struct RawDatabaseConfig {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

// Basic validation to check for empty strings or invalid numbers
impl RawDatabaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == StoreBackend::Postgres {
            match &self.database_url {
                None => {
                    return Err(
                        ConfigError::Config("DATABASE_URL is required for the postgres backend".into())
                    );
                }
                Some(url) if url.trim().is_empty() => {
                    return Err(ConfigError::Config("DATABASE_URL cannot be empty".into()));
                }
                Some(_) => {}
            }
        }
        if self.max_connections == 0 {
            return Err(
                ConfigError::Config("DATABASE_MAX_CONNECTIONS must be greater than zero".into())
            );
        }
        if self.connect_timeout_secs == 0 {
            return Err(
                ConfigError::Config("DATABASE_CONNECT_TIMEOUT_SECS must be greater than zero".into())
            );
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Build from a RawDatabaseConfig (which contains loaded fields).
    pub fn from_raw(raw: RawDatabaseConfig) -> Result<Self, ConfigError> {
        raw.validate()?;

        Ok(Self {
            backend: raw.backend,
            database_url: raw.database_url.unwrap_or_default(),
            max_connections: raw.max_connections,
            connect_timeout: Duration::from_secs(raw.connect_timeout_secs),
        })
    }

    /// Load from environment variables and build the config.
    pub fn new() -> Result<Self, ConfigError> {
        let raw = RawDatabaseConfig {
            backend: match env::var("STORE_BACKEND") {
                Ok(value) => value.parse()?,
                Err(_) => StoreBackend::Postgres,
            },
            database_url: env::var("DATABASE_URL").ok(),
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            connect_timeout_secs: parse_env(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS
            )?,
        };

        DatabaseConfig::from_raw(raw)
    }

    pub fn build_pool(&self) -> Result<PgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.database_url);
        let pool = Pool::builder()
            .max_size(self.max_connections)
            .connection_timeout(self.connect_timeout)
            .build(manager)?;

        Ok(pool)
    }
}

pub(crate) fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
    where T: FromStr, T::Err: std::fmt::Display
{
    match env::var(key) {
        Ok(value) =>
            value
                .trim()
                .parse()
                .map_err(|e| ConfigError::Config(format!("Failed to parse {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}
