//! Password security and cryptography utilities.
//!
//! Provides functions for secure password handling:
//! - Password hashing with Argon2id and a random salt
//! - Password verification against a stored PHC string

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use crate::types::ApiError;
use thiserror::Error;

/// Number of iterations for Argon2id
const ARGON2_TIME_COST: u32 = 2;
/// Memory cost parameter (in KiB)
const ARGON2_MEMORY_COST: u32 = 19456; // 19 MiB
/// Parallelism parameter
const ARGON2_PARALLELISM: u32 = 1;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingError(String),

    #[error("Failed to verify password: {0}")]
    VerificationError(String),
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::Password(error.to_string())
    }
}

/// Service for password-related security operations
pub struct PasswordService;

impl PasswordService {
    fn argon2() -> Result<Argon2<'static>, PasswordError> {
        let params =
            argon2::Params::new(ARGON2_MEMORY_COST, ARGON2_TIME_COST, ARGON2_PARALLELISM, None)
                .map_err(|e| PasswordError::HashingError(e.to_string()))?;

        Ok(Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params))
    }

    /// Hash a password using Argon2id with a fresh salt
    pub fn hash_password(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Self::argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingError(e.to_string()))
    }

    /// Verify a password against a previously generated hash
    ///
    /// Fails only when the stored hash can't be parsed; a wrong password is `Ok(false)`.
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::VerificationError(e.to_string()))?;

        // Parameters come from the PHC string itself.
        Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok())
    }
}
