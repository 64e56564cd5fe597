//! Cart route handlers.
//!
//! The cart lives in the session; every mutating handler loads it, applies
//! the operation, and writes it back only when the operation succeeded.
//! All cart routes require a logged-in user.

use axum::{
    Json,
    extract::State,
    Form,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use stepup_core::{Price, ProductId};

use crate::cart::{self, CartService};
use crate::error::Result;
use crate::models::{Cart, CartCount, CartItem};
use crate::pricing::{ShippingMethod, Totals, compute_totals};
use crate::routes::{current_user, load_cart, save_cart};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub size: u32,
    pub quantity: Option<u32>,
}

/// Update quantity form data. `delta` is signed; negative values shrink
/// the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub delta: i32,
}

/// Remove line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Cart line display data.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
    pub size: u32,
    pub quantity: u32,
    pub line_total: Price,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            size: item.size,
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// Cart display data with a standard-shipping totals preview.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub count: CartCount,
    pub totals: Totals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartLineView::from).collect(),
            count: cart.count(),
            totals: compute_totals(cart, ShippingMethod::Standard),
        }
    }
}

/// Show the cart with a totals preview.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    current_user(&session).await?;
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add a product and size to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Json<CartCount>> {
    current_user(&session).await?;
    let mut cart = load_cart(&session).await?;

    let service = CartService::new(state.products());
    let count = service.add(
        &mut cart,
        form.product_id,
        form.size,
        form.quantity.unwrap_or(1),
    )?;

    save_cart(&session, &cart).await?;
    Ok(Json(count))
}

/// Bump a cart line's quantity up or down.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Json<CartCount>> {
    current_user(&session).await?;
    let mut cart = load_cart(&session).await?;

    let count = cart::update_quantity(&mut cart, form.index, form.delta)?;

    save_cart(&session, &cart).await?;
    Ok(Json(count))
}

/// Remove a cart line.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Json<CartCount>> {
    current_user(&session).await?;
    let mut cart = load_cart(&session).await?;

    let count = cart::remove(&mut cart, form.index)?;

    save_cart(&session, &cart).await?;
    Ok(Json(count))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartCount>> {
    current_user(&session).await?;
    let mut cart = load_cart(&session).await?;

    let count = cart::clear(&mut cart);

    save_cart(&session, &cart).await?;
    Ok(Json(count))
}

/// Cart badge counts.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCount>> {
    current_user(&session).await?;
    let cart = load_cart(&session).await?;
    Ok(Json(cart.count()))
}
