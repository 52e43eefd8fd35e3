//! User Repository Module
//!
//! Defines the repository interface for user persistence and its SQL
//! implementation on top of the shared [`Database`] handle.

use super::error::UserError;
use super::models::{NewUser, User};
use crate::database::Database;
use async_trait::async_trait;

/// Repository trait defining operations for user data persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user; a duplicate email yields [`UserError::EmailTaken`]
    async fn create(&self, user: &NewUser) -> Result<User, UserError>;

    /// Finds a user by their (already normalized) email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}

/// SQL implementation of the UserRepository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db: Database,
}

impl SqlUserRepository {
    pub fn new(db: Database) -> Self {
        Self {
            db,
        }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserError> {
        let mut tx = self.db.pool().begin().await?;

        let inserted = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(id) => {
                tx.commit().await?;
                Ok(User {
                    id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                    password_hash: user.password_hash.clone(),
                })
            },
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    log::warn!("Rollback after failed insert failed: {rollback}");
                }
                Err(e.into())
            },
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DatabaseConfig;

    async fn repository() -> SqlUserRepository {
        let db = Database::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .unwrap();
        db.migrate().await.unwrap();
        SqlUserRepository::new(db)
    }

    async fn user_count(repo: &SqlUserRepository) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(repo.db.pool())
            .await
            .unwrap()
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Kim".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids() {
        let repo = repository().await;

        let first = repo.create(&new_user("a@example.com")).await.unwrap();
        let second = repo.create(&new_user("b@example.com")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(user_count(&repo).await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = repository().await;
        repo.create(&new_user("dup@example.com")).await.unwrap();

        let result = repo.create(&new_user("dup@example.com")).await;

        assert!(matches!(result, Err(UserError::EmailTaken)));
        assert_eq!(user_count(&repo).await, 1);
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = repository().await;
        let created = repo.create(&new_user("find@example.com")).await.unwrap();

        let found = repo.find_by_email("find@example.com").await.unwrap();
        assert_eq!(found, Some(created));

        let missing = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }
}
