//! Session cart types.

use serde::{Deserialize, Serialize};

use stepup_core::{Price, ProductId};

/// Maximum units of one (product, size) line a cart may hold.
pub const MAX_UNITS_PER_LINE: u32 = 5;

/// One (product, size, quantity) selection in the cart.
///
/// Name, price, image, and stock are snapshots taken when the line was
/// added; later catalog edits do not reach into open carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Resolved image URL at add time.
    pub image_url: String,
    /// EU size selected.
    pub size: u32,
    /// Units selected, `1..=MAX_UNITS_PER_LINE`.
    pub quantity: u32,
    /// Stock level at add time; quantity updates are capped against it.
    pub stock_at_add: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Line and unit counts for the cart badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartCount {
    /// Number of distinct lines.
    pub lines: usize,
    /// Sum of quantities across lines.
    pub units: u32,
}

/// A session-scoped shopping cart.
///
/// An ordered sequence of lines, unique by `(product_id, size)`. Owned by
/// exactly one session: created lazily on first add, destroyed on logout,
/// explicit clear, or successful checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the line for `(product_id, size)`, if present.
    #[must_use]
    pub fn position(&self, product_id: ProductId, size: u32) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id == product_id && item.size == size)
    }

    /// Line at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut CartItem> {
        self.items.get_mut(index)
    }

    pub(crate) fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, index: usize) -> CartItem {
        self.items.remove(index)
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Line and unit counts.
    #[must_use]
    pub fn count(&self) -> CartCount {
        CartCount {
            lines: self.items.len(),
            units: self.items.iter().map(|item| item.quantity).sum(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(product_id: i64, size: u32, quantity: u32, cents: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(product_id),
            name: format!("product-{product_id}"),
            price: Price::from_cents(cents),
            image_url: "/images/otros/product.jpg".to_owned(),
            size,
            quantity,
            stock_at_add: 10,
        }
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), CartCount { lines: 0, units: 0 });
        assert_eq!(cart.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_position_keyed_by_product_and_size() {
        let mut cart = Cart::default();
        cart.push(item(1, 40, 1, 4999));
        cart.push(item(1, 42, 1, 4999));

        assert_eq!(cart.position(ProductId::new(1), 40), Some(0));
        assert_eq!(cart.position(ProductId::new(1), 42), Some(1));
        assert_eq!(cart.position(ProductId::new(1), 38), None);
        assert_eq!(cart.position(ProductId::new(2), 40), None);
    }

    #[test]
    fn test_subtotal_and_count() {
        let mut cart = Cart::default();
        cart.push(item(1, 40, 2, 4999)); // 99.98
        cart.push(item(2, 41, 1, 12000)); // 120.00

        assert_eq!(cart.subtotal(), Price::from_cents(21998));
        assert_eq!(cart.count(), CartCount { lines: 2, units: 3 });
    }

    #[test]
    fn test_serde_roundtrip_for_session_storage() {
        let mut cart = Cart::default();
        cart.push(item(1, 40, 2, 4999));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items(), cart.items());
    }
}
