//! Authentication service
//!
//! Signup and login rules on top of a [`UserRepository`]. Handlers pass in
//! validated credentials; everything returned is safe to send to the client.

use crate::auth::password::PasswordService;
use crate::auth::validator::AuthCredentials;
use crate::types::ApiError;
use crate::user::models::{normalize_email, NewUser, PublicUser};
use crate::user::repository::UserRepository;
use std::sync::Arc;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "회원가입이 완료되었습니다.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "로그인 성공";

/// Service for signup and login
#[derive(Clone)]
pub struct AuthService {
    repo: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
        }
    }

    /// Registers a user and returns its public fields
    pub async fn signup(&self, credentials: AuthCredentials) -> Result<PublicUser, ApiError> {
        let name = credentials.name.as_deref().unwrap_or_default().trim().to_string();
        let email = normalize_email(&credentials.email);

        let password = credentials.password;
        let password_hash = run_blocking(move || PasswordService::hash_password(&password))
            .await?
            .map_err(ApiError::from)?;

        let user = self
            .repo
            .create(&NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        log::info!("User {} signed up", user.id);
        Ok(user.into())
    }

    /// Checks credentials; unknown emails and wrong passwords fail the same way
    pub async fn login(&self, credentials: AuthCredentials) -> Result<PublicUser, ApiError> {
        let email = normalize_email(&credentials.email);

        let Some(user) = self.repo.find_by_email(&email).await? else {
            log::warn!("Login failed: no account for the given email");
            return Err(ApiError::InvalidCredentials);
        };

        let password = credentials.password;
        let stored_hash = user.password_hash.clone();
        let verified =
            run_blocking(move || PasswordService::verify_password(&password, &stored_hash))
                .await?;

        match verified {
            Ok(true) => {
                log::info!("User {} logged in", user.id);
                Ok(user.into())
            },
            Ok(false) => {
                log::warn!("Login failed for user {}: wrong password", user.id);
                Err(ApiError::InvalidCredentials)
            },
            Err(e) => {
                log::warn!("Login failed for user {}: {e}", user.id);
                Err(ApiError::InvalidCredentials)
            },
        }
    }
}

/// Argon2 is CPU bound; keep it off the async workers.
async fn run_blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| ApiError::Internal {
        message: format!("Password task failed: {e}"),
    })
}
