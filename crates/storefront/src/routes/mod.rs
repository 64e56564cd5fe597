//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Product listing (q, categoria, precio, orden, destacados)
//! GET  /products/{id}          - Product detail
//!
//! # Cart (session-backed, requires login)
//! GET  /cart                   - Cart contents with totals preview
//! POST /cart/add               - Add a product/size to the cart
//! POST /cart/update            - Bump a line's quantity up or down
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart badge counts
//!
//! # Checkout (requires login)
//! POST /checkout               - Place an order from the cart
//! GET  /orders                 - Order history, newest first
//! GET  /orders/{id}            - Order detail (own orders only)
//! POST /orders/{id}/cancel     - Cancel a pending order
//!
//! # Auth
//! POST /auth/register          - Create an account
//! POST /auth/login             - Log in
//! POST /auth/logout            - Log out, dropping the session
//! GET  /auth/me                - Current user
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::error::{Result, StoreError};
use crate::models::{Cart, CurrentUser, session_keys};
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/{id}", get(catalog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/products", catalog_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::place_order))
        .route("/orders", get(checkout::orders))
        .route("/orders/{id}", get(checkout::order_detail))
        .route("/orders/{id}/cancel", post(checkout::cancel))
        .nest("/auth", auth_routes())
}

async fn health() -> &'static str {
    "ok"
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the logged-in user from the session.
///
/// # Errors
///
/// Returns [`StoreError::Unauthenticated`] when no user is logged in.
pub(crate) async fn current_user(session: &Session) -> Result<CurrentUser> {
    session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await?
        .ok_or(StoreError::Unauthenticated)
}

/// Get the session cart, or an empty one if none exists yet.
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the cart back to the session.
pub(crate) async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}
