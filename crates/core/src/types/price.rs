//! Decimal price representation.
//!
//! Prices use [`rust_decimal::Decimal`] rather than floating point so that
//! line totals and shipping thresholds compare exactly.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative: {amount}")]
    Negative {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A non-negative monetary amount.
///
/// The storefront deals in a single currency, so this is a plain decimal
/// amount with the zero floor enforced at construction. Serialized as the
/// decimal string (e.g. `"99.99"`).
///
/// ```
/// use stepup_core::Price;
///
/// let price = Price::from_cents(9999);
/// assert_eq!(price.to_string(), "$99.99");
/// assert!(Price::from_cents(10000) > price);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative { amount });
        }
        Ok(Self(amount))
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Line total: unit price times quantity.
impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let amount: Decimal = "-1.50".parse().unwrap();
        assert!(matches!(
            Price::new(amount),
            Err(PriceError::Negative { .. })
        ));
    }

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new("49.99".parse().unwrap()).is_ok());
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(9999);
        assert_eq!(price.amount(), "99.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_line_total() {
        let price = Price::from_cents(2550);
        assert_eq!(price * 3, Price::from_cents(7650));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_cents(1000), Price::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(1250));
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_cents(10000) > Price::from_cents(9999));
        assert!(Price::ZERO < Price::from_cents(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(500).to_string(), "$5.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Price::from_cents(9999)).unwrap();
        assert_eq!(json, "\"99.99\"");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::from_cents(9999));
    }
}
