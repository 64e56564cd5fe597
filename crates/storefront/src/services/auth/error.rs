//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] stepup_core::EmailError),

    /// Name missing or blank.
    #[error("name cannot be empty")]
    InvalidName,

    /// Wrong password or unknown email. Deliberately one error for both.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password does not meet requirements.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Account exists but is disabled.
    #[error("account disabled")]
    AccountDisabled,

    /// Storage layer error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing or hash parsing error.
    #[error("password hashing error")]
    PasswordHash,
}
