//! User module
//!
//! The `users` table: row models and the repository that reads and writes it.

pub mod error;
pub mod models;
pub mod repository;
