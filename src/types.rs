//! Type definitions for suwon_redev_api
//!
//! Contains the shared error types and configuration models used throughout the app.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Message shown to clients whenever a request fails for a server-side reason.
pub const INTERNAL_ERROR_MESSAGE: &str = "요청 처리 중 오류가 발생했습니다.";
pub const EMAIL_TAKEN_MESSAGE: &str = "이미 가입된 이메일입니다.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";

/// Application startup errors
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Database connection error: {0}")]
    Database(String),
    #[error("Server binding error: {0}")]
    ServerBind(String),
    #[error("Server error: {0}")]
    Server(String),
}

/// Runtime API errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
    #[error("Database error: {0}")]
    Database(String),
    #[error("Password error: {0}")]
    Password(String),
    /// Carries the user-facing message verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("Email already exists")]
    EmailAlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl ApiError {
    /// The message placed in the JSON body sent to the client.
    pub fn client_message(&self) -> &str {
        match self {
            ApiError::Validation(message) => message,
            ApiError::EmailAlreadyExists => EMAIL_TAKEN_MESSAGE,
            ApiError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            ApiError::Internal {
                ..
            }
            | ApiError::Config {
                ..
            }
            | ApiError::Database(_)
            | ApiError::Password(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

/// JSON body for every response that only carries a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::EmailAlreadyExists => StatusCode::CONFLICT,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Internal {
                ..
            }
            | ApiError::Config {
                ..
            }
            | ApiError::Database(_)
            | ApiError::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{self}");
        }
        HttpResponse::build(status).json(MessageResponse::new(self.client_message()))
    }
}

/// Complete app configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Normalized connection string
    pub url: String,
    pub max_connections: u32,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub keep_alive: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            server: ServerConfig::default(),
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://app.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: num_cpus::get(),
            keep_alive: Duration::from_secs(30),
        }
    }
}
