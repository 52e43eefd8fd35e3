//! Database handle for suwon_redev_api
//!
//! Wraps a sqlx `AnyPool` so the same code runs against the default SQLite file
//! and a PostgreSQL server. The handle is built once in `main`, migrated, shared
//! with the handlers through `web::Data` and closed when the server stops.

use crate::types::{ApiError, DatabaseConfig};
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::path::Path;
use std::time::Duration;

/// SQL dialect behind the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ApiError> {
        if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else if url.starts_with("postgresql://") || url.starts_with("postgres://") {
            Ok(Backend::Postgres)
        } else {
            Err(ApiError::Config {
                message: format!("Unsupported database URL scheme: {url}"),
            })
        }
    }

    fn create_users_table(self) -> &'static str {
        match self {
            Backend::Sqlite => {
                r"
                CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name VARCHAR(120) NOT NULL,
                    email VARCHAR(255) NOT NULL UNIQUE,
                    password_hash VARCHAR(255) NOT NULL
                )
                "
            },
            Backend::Postgres => {
                r"
                CREATE TABLE IF NOT EXISTS users (
                    id BIGSERIAL PRIMARY KEY,
                    name VARCHAR(120) NOT NULL,
                    email VARCHAR(255) NOT NULL UNIQUE,
                    password_hash VARCHAR(255) NOT NULL
                )
                "
            },
        }
    }
}

#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
    backend: Backend,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("pool", &"<AnyPool>")
            .field("backend", &self.backend)
            .finish()
    }
}

impl Database {
    /// Open the pool and run a connection test.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ApiError> {
        install_default_drivers();

        let backend = Backend::from_url(&config.url)?;
        let in_memory = backend == Backend::Sqlite && config.url.contains(":memory:");

        let url = match backend {
            Backend::Sqlite if !in_memory => prepare_sqlite_file(&config.url)?,
            _ => config.url.clone(),
        };

        // Every connection to an in-memory SQLite database sees its own empty
        // database, so the pool must hold exactly one connection forever.
        let options = if in_memory {
            AnyPoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            AnyPoolOptions::new().max_connections(config.max_connections)
        };

        let pool = options
            .connect(&url)
            .await
            .map_err(|e| ApiError::Database(format!("Failed to connect: {e}")))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| ApiError::Database(format!("Connection test failed: {e}")))?;

        log::info!("Database connection established ({backend:?})");

        Ok(Self {
            pool,
            backend,
        })
    }

    /// Create the `users` table when it does not exist yet.
    pub async fn migrate(&self) -> Result<(), ApiError> {
        sqlx::query(self.backend.create_users_table())
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Database(format!("Failed to create tables: {e}")))?;

        log::info!("Database schema is up to date");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        log::info!("Database connections closed");
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

/// Make sure the SQLite file can be created: create its parent directory and
/// ask the driver to create the file when it is missing.
fn prepare_sqlite_file(url: &str) -> Result<String, ApiError> {
    let without_scheme = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let (path, query) = match without_scheme.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_scheme, None),
    };

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ApiError::Config {
                message: format!("Failed to create database directory {}: {e}", parent.display()),
            })?;
        }
    }

    Ok(match query {
        Some(query) if query.contains("mode=") => url.to_string(),
        Some(_) => format!("{url}&mode=rwc"),
        None => format!("{url}?mode=rwc"),
    })
}
