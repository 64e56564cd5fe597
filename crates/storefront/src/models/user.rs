//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stepup_core::{Email, UserId, UserRole};

/// A registered storefront user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique email address, used to log in.
    pub email: Email,
    /// Argon2 password hash. Never the cleartext.
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// Disabled accounts cannot log in.
    pub active: bool,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
    /// Most recent successful login, if any.
    pub last_login: Option<DateTime<Utc>>,
}

/// A user draft, ready to be persisted. The user store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: Email,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// Whether the account starts enabled.
    pub active: bool,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
}

impl NewUser {
    /// Attach a store-assigned ID, producing the persisted form.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            active: self.active,
            registered_at: self.registered_at,
            last_login: None,
        }
    }
}
