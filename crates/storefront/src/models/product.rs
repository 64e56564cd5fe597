//! Product and category domain types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stepup_core::{CategoryId, Price, ProductId};

/// A product category (e.g. "Deportivas", "Botas").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name; catalog filtering matches it case-insensitively.
    pub name: String,
}

/// A shoe in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description shown on the product page.
    pub description: String,
    /// Current selling price.
    pub price: Price,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<Price>,
    /// Units available.
    pub stock: u32,
    /// Stored image reference: bare filename, relative path, or absolute URL.
    /// Resolved to a servable URL by [`crate::images::resolve_image_url`].
    pub image_ref: String,
    /// Shown on the home page when set.
    pub featured: bool,
    /// Inactive products are hidden from the catalog and cannot be added to
    /// a cart.
    pub active: bool,
    /// Category this product belongs to.
    pub category: Category,
    /// EU sizes this product is offered in.
    pub sizes: BTreeSet<u32>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product is offered in the given size.
    #[must_use]
    pub fn offers_size(&self, size: u32) -> bool {
        self.sizes.contains(&size)
    }

    /// Whether the product is discounted below its original price.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::seed;

    #[test]
    fn test_offers_size() {
        let product = seed::product_fixture(1, "Runner", "deportivas", 4999, 10);
        assert!(product.offers_size(40));
        assert!(!product.offers_size(33));
    }

    #[test]
    fn test_on_sale() {
        use stepup_core::Price;

        let mut product = seed::product_fixture(1, "Runner", "deportivas", 4999, 10);
        assert!(!product.on_sale());

        product.original_price = Some(Price::from_cents(5999));
        assert!(product.on_sale());

        // Equal original price is not a discount
        product.original_price = Some(product.price);
        assert!(!product.on_sale());
    }
}
