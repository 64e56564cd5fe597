//! Session-stored types.
//!
//! The session holds exactly two values: the logged-in identity and the
//! cart. Both are plain serializable values; services receive them
//! explicitly rather than reading ambient session state.

use serde::{Deserialize, Serialize};

use stepup_core::{Email, UserId};

/// Minimal identity stored in the session for the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's store ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
}

impl From<&crate::models::User> for CurrentUser {
    fn from(user: &crate::models::User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Session keys.
pub mod session_keys {
    /// Key for the logged-in user identity.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the shopping cart.
    pub const CART: &str = "cart";
}
