//! Password hashing

pub mod security;

pub use security::{PasswordError, PasswordService};
