//! Checkout and order history route handlers.

use axum::{
    Json,
    extract::{Path, State},
    Form,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use stepup_core::{OrderId, OrderStatus, Price};

use crate::checkout::CheckoutService;
use crate::error::Result;
use crate::models::{Order, OrderLine};
use crate::pricing::{ShippingMethod, Totals};
use crate::routes::{current_user, load_cart, save_cart};
use crate::state::AppState;

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    /// Shipping method label; unknown labels mean standard shipping.
    pub envio: Option<String>,
}

/// Order display data.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub number: String,
    pub status: OrderStatus,
    pub total: Price,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            number: order.number,
            status: order.status,
            total: order.total,
            created_at: order.created_at,
            lines: order.lines,
        }
    }
}

/// Checkout response: the stored order plus the totals breakdown.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order: OrderView,
    pub totals: Totals,
}

/// Place an order from the session cart.
///
/// On success the session cart is emptied; on failure it is left as it
/// was.
#[instrument(skip(state, session))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Json<CheckoutResponse>> {
    let user = current_user(&session).await?;
    let mut cart = load_cart(&session).await?;

    let method = form
        .envio
        .as_deref()
        .map_or(ShippingMethod::Standard, ShippingMethod::parse);

    let service = CheckoutService::new(state.orders());
    let (order, totals) = service.place_order(user.id, &mut cart, method)?;

    save_cart(&session, &cart).await?;
    Ok(Json(CheckoutResponse {
        order: OrderView::from(order),
        totals,
    }))
}

/// The user's order history, newest first.
#[instrument(skip(state, session))]
pub async fn orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<OrderView>>> {
    let user = current_user(&session).await?;

    let service = CheckoutService::new(state.orders());
    let orders = service.orders_for(user.id)?;
    Ok(Json(orders.into_iter().map(OrderView::from).collect()))
}

/// Cancel one of the user's pending orders.
#[instrument(skip(state, session))]
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderView>> {
    let user = current_user(&session).await?;

    let service = CheckoutService::new(state.orders());
    let order = service.cancel(user.id, id)?;
    Ok(Json(OrderView::from(order)))
}

/// One of the user's orders.
#[instrument(skip(state, session))]
pub async fn order_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderView>> {
    let user = current_user(&session).await?;

    let service = CheckoutService::new(state.orders());
    let order = service.order_detail(user.id, id)?;
    Ok(Json(OrderView::from(order)))
}
