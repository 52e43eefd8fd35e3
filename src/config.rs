//! Configuration management for suwon_redev_api
//!
//! Handles loading and validation of app configuration from environment variables
//! with sensible defaults.

use crate::types::{ApiError, AppConfig, DatabaseConfig, ServerConfig};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_DB_FILE: &str = "app.db";

/// Load complete app configuration
pub fn load_config() -> Result<AppConfig, ApiError> {
    let config = AppConfig {
        database: load_database_config(),
        server: load_server_config(),
        cors_origins: load_cors_origins(),
        log_level: load_log_level(),
    };

    validate_config(&config)?;
    Ok(config)
}

/// Load database configuration
fn load_database_config() -> DatabaseConfig {
    let url = env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| default_database_url(env::var("DATA_DIR").ok().as_deref()));

    DatabaseConfig {
        url: normalize_database_url(&url),
        max_connections: env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5),
    }
}

/// SQLite file next to the data directory, or in the working directory.
pub fn default_database_url(data_dir: Option<&str>) -> String {
    let path = match data_dir {
        Some(dir) if !dir.is_empty() => Path::new(dir).join(DEFAULT_DB_FILE),
        _ => PathBuf::from(DEFAULT_DB_FILE),
    };
    format!("sqlite://{}", path.display())
}

/// Rewrite the `postgres://` alias to the standard `postgresql://` scheme.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}

/// Load server configuration
fn load_server_config() -> ServerConfig {
    ServerConfig {
        host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: env::var("SERVER_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(5000),
        workers: env::var("SERVER_WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or_else(num_cpus::get),
        keep_alive: Duration::from_secs(
            env::var("SERVER_KEEP_ALIVE").ok().and_then(|ka| ka.parse().ok()).unwrap_or(30),
        ),
    }
}

/// Load CORS origins
fn load_cors_origins() -> Vec<String> {
    parse_cors_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()))
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}

/// Load log level
fn load_log_level() -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<(), ApiError> {
    if config.database.url.is_empty() {
        return Err(ApiError::Config {
            message: "Database URL can't be empty".to_string(),
        });
    }

    if config.database.max_connections == 0 {
        return Err(ApiError::Config {
            message: "Database pool needs at least one connection".to_string(),
        });
    }

    if config.server.port == 0 {
        return Err(ApiError::Config {
            message: "Server port must be between 1 and 65,535".to_string(),
        });
    }

    if config.server.workers == 0 {
        return Err(ApiError::Config {
            message: "Server needs at least one worker".to_string(),
        });
    }

    Ok(())
}

/// Get bind address from configuration
pub fn get_bind_address(config: &AppConfig) -> String {
    format!("{}:{}", config.server.host, config.server.port)
}

/// Log the loaded configuration, hiding database credentials.
pub fn log_config(config: &AppConfig) {
    log::info!("Configuration loaded");
    log::info!("   Database: {}", mask_sensitive_url(&config.database.url));
    log::info!("   Server: {}", get_bind_address(config));
    log::info!("   Workers: {}", config.server.workers);
    log::info!("   CORS Origins: {:?}", config.cors_origins);
    log::info!("   Log Level: {}", config.log_level);
}

pub fn mask_sensitive_url(url: &str) -> String {
    if let Some(at_pos) = url.rfind('@') {
        let (before_at, after_at) = url.split_at(at_pos);
        if let Some(protocol_end) = before_at.find("://") {
            let protocol = &before_at[..protocol_end + 3];
            format!("{protocol}***{after_at}")
        } else {
            "***".to_string()
        }
    } else {
        url.to_string()
    }
}
