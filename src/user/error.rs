//! User-related error types

use crate::types::ApiError;
use thiserror::Error;

/// User store errors
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email already in use")]
    EmailTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UserError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                UserError::EmailTaken
            },
            _ => UserError::DatabaseError(error.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::EmailTaken => ApiError::EmailAlreadyExists,
            UserError::DatabaseError(message) => ApiError::Database(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_a_database_error() {
        let error = UserError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, UserError::DatabaseError(_)));
    }

    #[test]
    fn test_into_api_error() {
        assert_eq!(ApiError::from(UserError::EmailTaken), ApiError::EmailAlreadyExists);
        assert_eq!(
            ApiError::from(UserError::DatabaseError("disk I/O error".into())),
            ApiError::Database("disk I/O error".into())
        );
    }
}
