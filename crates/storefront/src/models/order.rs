//! Order domain types.
//!
//! An order is an immutable snapshot of a cart at checkout time: line values
//! are copied, not referenced, so later product edits never alter placed
//! orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stepup_core::{OrderId, OrderStatus, Price, ProductId, UserId};

/// One line of an order, captured by value at placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product the line was created from.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price at placement.
    pub price: Price,
    /// EU size ordered.
    pub size: u32,
}

impl OrderLine {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// An order draft, ready to be persisted. The order store assigns the ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    /// Human-readable order number (e.g. `PED1724830000000123`).
    pub number: String,
    /// Customer who placed the order.
    pub user_id: UserId,
    /// Snapshot lines.
    pub lines: Vec<OrderLine>,
    /// Subtotal plus shipping.
    pub total: Price,
    /// Lifecycle status, `Pending` at placement.
    pub status: OrderStatus,
    /// Placement time.
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    /// Attach a store-assigned ID, producing the persisted form.
    #[must_use]
    pub fn with_id(self, id: OrderId) -> Order {
        Order {
            id,
            number: self.number,
            user_id: self.user_id,
            lines: self.lines,
            total: self.total,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// A persisted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned ID.
    pub id: OrderId,
    /// Human-readable order number.
    pub number: String,
    /// Customer who placed the order.
    pub user_id: UserId,
    /// Snapshot lines.
    pub lines: Vec<OrderLine>,
    /// Subtotal plus shipping.
    pub total: Price,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Placement time.
    pub created_at: DateTime<Utc>,
}
