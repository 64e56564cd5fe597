//! Checkout: turning a cart into an order.

use chrono::Utc;
use rand::Rng;

use stepup_core::{OrderId, OrderStatus, UserId};

use crate::db::OrderStore;
use crate::error::{Result, StoreError};
use crate::models::{Cart, NewOrder, Order, OrderLine};
use crate::pricing::{ShippingMethod, Totals, compute_totals};

/// Checkout operations over the order store.
pub struct CheckoutService<'a> {
    orders: &'a dyn OrderStore,
}

impl<'a> CheckoutService<'a> {
    /// Create a checkout service over an order store.
    #[must_use]
    pub const fn new(orders: &'a dyn OrderStore) -> Self {
        Self { orders }
    }

    /// Place an order for the cart's contents and empty the cart.
    ///
    /// Order lines copy the cart's snapshotted prices; the total includes
    /// shipping as computed by [`compute_totals`]. The cart is cleared only
    /// after the order is stored, so a storage failure leaves it intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCart`] for an empty cart and
    /// [`StoreError::Repository`] if the order cannot be stored.
    pub fn place_order(
        &self,
        user_id: UserId,
        cart: &mut Cart,
        method: ShippingMethod,
    ) -> Result<(Order, Totals)> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let totals = compute_totals(cart, method);
        let lines = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
                size: item.size,
            })
            .collect();

        let order = self.orders.insert(NewOrder {
            number: generate_order_number(),
            user_id,
            lines,
            total: totals.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })?;

        cart.clear();
        Ok((order, totals))
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Repository`] if the store fails.
    pub fn orders_for(&self, user_id: UserId) -> Result<Vec<Order>> {
        Ok(self.orders.list_for_user(user_id)?)
    }

    /// Cancel one of the user's orders.
    ///
    /// Only pending orders can be cancelled; the lifecycle in
    /// [`OrderStatus`] decides.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown ids and for orders
    /// belonging to someone else, and [`StoreError::Status`] for orders
    /// already shipped, delivered, or cancelled.
    pub fn cancel(&self, user_id: UserId, order_id: OrderId) -> Result<Order> {
        let mut order = self.order_detail(user_id, order_id)?;
        let cancelled = order.status.transition(OrderStatus::Cancelled)?;
        self.orders.set_status(order.id, cancelled)?;
        order.status = cancelled;
        Ok(order)
    }

    /// Fetch one of the user's orders.
    ///
    /// Another user's order is reported as missing, not as forbidden, so
    /// order ids cannot be probed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown ids and for orders
    /// belonging to someone else.
    pub fn order_detail(&self, user_id: UserId, order_id: OrderId) -> Result<Order> {
        self.orders
            .get(order_id)?
            .filter(|order| order.user_id == user_id)
            .ok_or_else(|| StoreError::NotFound(format!("order {order_id}")))
    }
}

/// Generate a customer-facing order number.
///
/// `PED` plus a millisecond timestamp plus three random digits; unique
/// enough for a reference customers read back over the phone.
fn generate_order_number() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u16 = rand::rng().random_range(0..1000);
    format!("PED{millis}{suffix:03}")
}
