//! User models
//!
//! Row type of the `users` table and its public projection.

use serde::{Deserialize, Serialize};

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields needed to insert a user; the id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// The part of a user that may leave the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Trim and lowercase an email address the way it is stored.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
