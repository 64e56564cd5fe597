//! Session layer configuration.

use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name.
const SESSION_COOKIE: &str = "stepup_session";

/// Sessions expire after this much inactivity.
const SESSION_IDLE: Duration = Duration::days(7);

/// Build the session layer backed by an in-memory store.
///
/// Cookies are HTTP-only and `SameSite=Lax`; `secure` should be set when
/// the storefront is served over HTTPS.
#[must_use]
pub fn create_session_layer(secure: bool) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(SESSION_IDLE))
}
