//! Demo catalog used by the binary and by tests.

use std::collections::BTreeSet;

use chrono::Utc;

use stepup_core::{CategoryId, Price, ProductId};

use super::RepositoryError;
use super::memory::MemoryProducts;
use crate::models::{Category, Product};

fn category_id(name: &str) -> CategoryId {
    match name {
        "deportivas" => CategoryId::new(1),
        "casuales" => CategoryId::new(2),
        "formales" => CategoryId::new(3),
        "botas" => CategoryId::new(4),
        "sandalias" => CategoryId::new(5),
        _ => CategoryId::new(99),
    }
}

/// Build a product with the common defaults (EU sizes 38-44, active, image
/// named after the product).
#[must_use]
pub fn product_fixture(id: i64, name: &str, category: &str, cents: u32, stock: u32) -> Product {
    let now = Utc::now();
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: format!("{name} - catalogo StepUp"),
        price: Price::from_cents(cents),
        original_price: None,
        stock,
        image_ref: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        featured: false,
        active: true,
        category: Category {
            id: category_id(category),
            name: category.to_owned(),
        },
        sizes: BTreeSet::from([38, 39, 40, 41, 42, 43, 44]),
        created_at: now,
        updated_at: now,
    }
}

/// Load the demo shoe catalog into a [`MemoryProducts`] store.
///
/// Covers the cases the storefront has to handle: featured and discounted
/// products, an externally hosted image, a bare image name without
/// extension, and an inactive product that must stay hidden.
///
/// # Errors
///
/// Returns [`RepositoryError::Storage`] if the store lock is poisoned.
pub fn demo_catalog(products: &MemoryProducts) -> Result<(), RepositoryError> {
    let mut runner = product_fixture(1, "Urban Runner", "deportivas", 8999, 12);
    runner.featured = true;
    runner.original_price = Some(Price::from_cents(10999));
    products.put(runner)?;

    let mut trail = product_fixture(2, "Trail Max", "deportivas", 12999, 8);
    trail.image_ref = "https://storage.googleapis.com/stepup-shoes/productos/trail-max.jpg".into();
    products.put(trail)?;

    let mut loafer = product_fixture(3, "City Loafer", "casuales", 5999, 20);
    loafer.image_ref = "city-loafer".into();
    products.put(loafer)?;

    products.put(product_fixture(4, "Oxford Clasico", "formales", 15999, 5))?;

    let mut boot = product_fixture(5, "Montana Boot", "botas", 17999, 6);
    boot.featured = true;
    products.put(boot)?;

    let mut retired = product_fixture(6, "Retro 90", "deportivas", 4500, 0);
    retired.active = false;
    products.put(retired)?;

    products.put(product_fixture(7, "Playa Sandal", "sandalias", 2999, 30))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::ProductStore;

    #[test]
    fn test_demo_catalog_loads() {
        let products = MemoryProducts::new();
        demo_catalog(&products).unwrap();

        let all = products.list().unwrap();
        assert_eq!(all.len(), 7);
        assert!(all.iter().any(|p| !p.active));
        assert!(all.iter().any(|p| p.image_ref.starts_with("https://")));
    }
}
