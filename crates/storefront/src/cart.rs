//! Cart operations.
//!
//! The cart lives in the session as a plain value; these operations take
//! it by mutable reference and return the updated [`CartCount`] so the
//! frontend can refresh its badge without a second request. Lines snapshot
//! the product's name, price, and image at add time, so later catalog
//! edits never change what the customer saw.

use stepup_core::ProductId;

use crate::db::ProductStore;
use crate::error::{Result, StoreError};
use crate::images::resolve_image_url;
use crate::models::{Cart, CartCount, CartItem, MAX_UNITS_PER_LINE};

/// Cart operations that need product lookups.
pub struct CartService<'a> {
    products: &'a dyn ProductStore,
}

impl<'a> CartService<'a> {
    /// Create a cart service over a product store.
    #[must_use]
    pub const fn new(products: &'a dyn ProductStore) -> Self {
        Self { products }
    }

    /// Add `quantity` units of a product in a given size to the cart.
    ///
    /// Adding a product and size already in the cart merges into the
    /// existing line. The merged quantity is checked against both the
    /// per-line cap and the product's current stock before anything is
    /// written, so a failed add leaves the cart untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown or inactive products,
    /// [`StoreError::InvalidInput`] for a zero quantity or a size the
    /// product does not offer, [`StoreError::QuantityLimitExceeded`] when
    /// the line would exceed [`MAX_UNITS_PER_LINE`] units, and
    /// [`StoreError::InsufficientStock`] when stock cannot cover the line.
    pub fn add(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
        size: u32,
        quantity: u32,
    ) -> Result<CartCount> {
        if quantity == 0 {
            return Err(StoreError::InvalidInput(
                "quantity must be at least 1".to_owned(),
            ));
        }

        let product = self
            .products
            .get(product_id)?
            .filter(|p| p.active)
            .ok_or_else(|| StoreError::NotFound(format!("product {product_id}")))?;

        if !product.offers_size(size) {
            return Err(StoreError::InvalidInput(format!(
                "size {size} not available for {}",
                product.name
            )));
        }

        let existing = cart.position(product_id, size);
        let current = existing
            .and_then(|i| cart.get(i))
            .map_or(0, |line| line.quantity);

        // The form quantity is unbounded; compare widened.
        let wanted = u64::from(current) + u64::from(quantity);
        if wanted > u64::from(MAX_UNITS_PER_LINE) {
            return Err(StoreError::QuantityLimitExceeded);
        }

        #[allow(clippy::cast_possible_truncation)]
        let wanted = wanted as u32;
        if wanted > product.stock {
            return Err(StoreError::InsufficientStock {
                requested: wanted,
                available: product.stock,
            });
        }

        if let Some(index) = existing {
            if let Some(line) = cart.get_mut(index) {
                line.quantity = wanted;
                line.stock_at_add = product.stock;
            }
        } else {
            cart.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                image_url: resolve_image_url(Some(&product.image_ref), &product.category.name),
                size,
                quantity,
                stock_at_add: product.stock,
            });
        }

        Ok(cart.count())
    }
}

/// Change a cart line's quantity by `delta`.
///
/// Dropping to zero or below removes the line. Increases are checked
/// against the per-line cap and the stock snapshotted when the line was
/// added.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] for an out-of-range line index,
/// [`StoreError::QuantityLimitExceeded`] past the per-line cap, and
/// [`StoreError::InsufficientStock`] past the snapshotted stock.
pub fn update_quantity(cart: &mut Cart, index: usize, delta: i32) -> Result<CartCount> {
    let line = cart
        .get(index)
        .ok_or_else(|| StoreError::NotFound(format!("cart line {index}")))?;

    let wanted = i64::from(line.quantity) + i64::from(delta);
    if wanted <= 0 {
        cart.remove(index);
        return Ok(cart.count());
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let wanted = wanted as u32;
    if wanted > MAX_UNITS_PER_LINE {
        return Err(StoreError::QuantityLimitExceeded);
    }
    if wanted > line.stock_at_add {
        return Err(StoreError::InsufficientStock {
            requested: wanted,
            available: line.stock_at_add,
        });
    }

    if let Some(line) = cart.get_mut(index) {
        line.quantity = wanted;
    }
    Ok(cart.count())
}

/// Remove a cart line.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] for an out-of-range line index.
pub fn remove(cart: &mut Cart, index: usize) -> Result<CartCount> {
    if cart.get(index).is_none() {
        return Err(StoreError::NotFound(format!("cart line {index}")));
    }
    cart.remove(index);
    Ok(cart.count())
}

/// Empty the cart.
pub fn clear(cart: &mut Cart) -> CartCount {
    cart.clear();
    cart.count()
}
