//! Shipping methods and order totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stepup_core::Price;

use crate::models::Cart;

/// Subtotals at or above this amount ship free regardless of method.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// How an order is shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    /// Regular delivery, flat $10.00.
    Standard,
    /// Expedited delivery, flat $20.00.
    Express,
    /// Promotional free shipping.
    Free,
}

impl ShippingMethod {
    /// Parse a shipping method label from a checkout form.
    ///
    /// Unrecognized labels fall back to standard shipping rather than
    /// failing the checkout.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "express" => Self::Express,
            "gratis" | "free" => Self::Free,
            _ => Self::Standard,
        }
    }

    /// Flat fee for this method before the free-shipping threshold.
    #[must_use]
    pub fn base_fee(self) -> Price {
        match self {
            Self::Standard => Price::from_cents(1000),
            Self::Express => Price::from_cents(2000),
            Self::Free => Price::ZERO,
        }
    }
}

/// Computed money amounts for a cart at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal: Price,
    /// Shipping fee after the free-shipping threshold is applied.
    pub shipping: Price,
    /// `subtotal + shipping`.
    pub total: Price,
}

/// Compute the totals for a cart with the given shipping method.
///
/// The shipping fee drops to zero once the subtotal reaches
/// [`FREE_SHIPPING_THRESHOLD`], whatever the method.
#[must_use]
pub fn compute_totals(cart: &Cart, method: ShippingMethod) -> Totals {
    let subtotal = cart.subtotal();
    let shipping = if subtotal.amount() >= FREE_SHIPPING_THRESHOLD {
        Price::ZERO
    } else {
        method.base_fee()
    };

    Totals {
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}
