//! Authentication module
//!
//! Email/password signup and login:
//! - Payload validation with localized messages
//! - Password hashing with Argon2id
//! - Signup/login service over the user repository

pub mod dto;
pub mod handlers;
pub mod password;
pub mod routes;
pub mod service;
pub mod validator;

pub use service::AuthService;
pub use validator::{AuthCredentials, AuthMode};
