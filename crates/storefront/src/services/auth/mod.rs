//! Authentication service.
//!
//! Email/password registration and login against the user store. Passwords
//! are hashed with argon2; the cleartext is never stored.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;

use stepup_core::{Email, UserRole};

use crate::db::{RepositoryError, UserStore};
use crate::models::{NewUser, User};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
pub struct AuthService<'a> {
    users: &'a dyn UserStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service over a user store.
    #[must_use]
    pub const fn new(users: &'a dyn UserStore) -> Self {
        Self { users }
    }

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidName` if the name is blank,
    /// `AuthError::InvalidEmail` if the email format is invalid,
    /// `AuthError::WeakPassword` if the password doesn't meet requirements,
    /// and `AuthError::UserAlreadyExists` if the email is taken.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::InvalidName);
        }

        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .insert(NewUser {
                name: name.to_owned(),
                email,
                password_hash,
                role: UserRole::Customer,
                active: true,
                registered_at: Utc::now(),
            })
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Log in with email and password.
    ///
    /// Records the login time on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or a
    /// wrong password, and `AuthError::AccountDisabled` for a disabled
    /// account.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let mut user = self
            .users
            .find_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        if !user.active {
            return Err(AuthError::AccountDisabled);
        }

        let now = Utc::now();
        self.users.record_login(user.id, now)?;
        user.last_login = Some(now);

        Ok(user)
    }
}

/// Validate password strength requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with argon2 and a fresh salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::PasswordHash)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryUsers;

    #[test]
    fn test_register_hashes_password() {
        let users = MemoryUsers::new();
        let auth = AuthService::new(&users);

        let user = auth
            .register("Ana", "ana@example.com", "correcthorse")
            .unwrap();
        assert_ne!(user.password_hash, "correcthorse");
        assert!(user.password_hash.starts_with("$argon2"));
        assert_eq!(user.role, UserRole::Customer);
        assert!(user.active);
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let users = MemoryUsers::new();
        let auth = AuthService::new(&users);

        let err = auth
            .register("   ", "ana@example.com", "correcthorse")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidName));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let users = MemoryUsers::new();
        let auth = AuthService::new(&users);

        let err = auth.register("Ana", "ana@example.com", "short").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[test]
    fn test_register_duplicate_email() {
        let users = MemoryUsers::new();
        let auth = AuthService::new(&users);

        auth.register("Ana", "ana@example.com", "correcthorse")
            .unwrap();
        let err = auth
            .register("Ana Maria", "ana@example.com", "correcthorse")
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
    }

    #[test]
    fn test_login_roundtrip_and_records_time() {
        let users = MemoryUsers::new();
        let auth = AuthService::new(&users);

        auth.register("Ana", "ana@example.com", "correcthorse")
            .unwrap();
        let user = auth.login("ana@example.com", "correcthorse").unwrap();
        assert!(user.last_login.is_some());
    }

    #[test]
    fn test_login_wrong_password() {
        let users = MemoryUsers::new();
        let auth = AuthService::new(&users);

        auth.register("Ana", "ana@example.com", "correcthorse")
            .unwrap();
        let err = auth.login("ana@example.com", "wrongwrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_login_unknown_email_same_error_as_wrong_password() {
        let users = MemoryUsers::new();
        let auth = AuthService::new(&users);

        let err = auth.login("nadie@example.com", "correcthorse").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_login_disabled_account() {
        let users = MemoryUsers::new();
        users
            .insert(NewUser {
                name: "Ana".to_owned(),
                email: Email::parse("ana@example.com").unwrap(),
                password_hash: hash_password("correcthorse").unwrap(),
                role: UserRole::Customer,
                active: false,
                registered_at: Utc::now(),
            })
            .unwrap();

        let auth = AuthService::new(&users);
        let err = auth.login("ana@example.com", "correcthorse").unwrap_err();
        assert!(matches!(err, AuthError::AccountDisabled));
    }
}
