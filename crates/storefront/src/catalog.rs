//! Catalog filtering and sorting.
//!
//! The product listing accepts free-form query parameters from the
//! frontend; everything here parses permissively, so an unrecognized
//! filter value widens rather than errors.

use rust_decimal::Decimal;

use crate::models::Product;

/// A half-open or closed price interval, parsed from a bucket label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Decimal,
    max: Option<Decimal>,
    min_exclusive: bool,
    max_exclusive: bool,
}

impl PriceRange {
    /// Parse a price bucket label from the listing query.
    ///
    /// Known buckets are `menos-50`, `50-100`, `100-150`, and `150-200`.
    /// The middle buckets exclude their lower bound so a price lands in
    /// exactly one bucket. Unknown labels match every price.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "menos-50" => Self {
                min: Decimal::ZERO,
                max: Some(Decimal::from(50)),
                min_exclusive: false,
                max_exclusive: true,
            },
            "50-100" => Self {
                min: Decimal::from(50),
                max: Some(Decimal::from(100)),
                min_exclusive: false,
                max_exclusive: false,
            },
            "100-150" => Self {
                min: Decimal::from(100),
                max: Some(Decimal::from(150)),
                min_exclusive: true,
                max_exclusive: false,
            },
            "150-200" => Self {
                min: Decimal::from(150),
                max: Some(Decimal::from(200)),
                min_exclusive: true,
                max_exclusive: false,
            },
            _ => Self::all(),
        }
    }

    /// The range matching every price.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            min: Decimal::ZERO,
            max: None,
            min_exclusive: false,
            max_exclusive: false,
        }
    }

    /// Whether a price falls inside this range.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        let above = if self.min_exclusive {
            price > self.min
        } else {
            price >= self.min
        };
        let below = self.max.is_none_or(|max| {
            if self.max_exclusive {
                price < max
            } else {
                price <= max
            }
        });
        above && below
    }
}

/// How the product listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Alphabetical by name, case-insensitive.
    NameAsc,
    /// Catalog order (by product id).
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parse a sort label from the listing query. Unknown labels keep the
    /// catalog order.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "precio-asc" => Self::PriceAsc,
            "precio-desc" => Self::PriceDesc,
            "nombre-asc" => Self::NameAsc,
            _ => Self::Unsorted,
        }
    }
}

/// Combined listing filter.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Case-insensitive substring match on name and description.
    pub search: Option<String>,
    /// Case-insensitive exact match on category name.
    pub category: Option<String>,
    /// Price bucket.
    pub price: Option<PriceRange>,
    /// Only products marked featured.
    pub featured_only: bool,
    /// Listing order.
    pub sort: SortKey,
}

/// Apply a filter and sort to a product listing.
///
/// Inactive products never appear, whatever the filter says.
#[must_use]
pub fn filter_and_sort(products: Vec<Product>, filter: &CatalogFilter) -> Vec<Product> {
    let search = filter.search.as_deref().map(str::to_lowercase);
    let category = filter.category.as_deref().map(str::to_lowercase);

    let mut out: Vec<Product> = products
        .into_iter()
        .filter(|p| p.active)
        .filter(|p| !filter.featured_only || p.featured)
        .filter(|p| {
            category
                .as_deref()
                .is_none_or(|c| p.category.name.to_lowercase() == c)
        })
        .filter(|p| {
            search.as_deref().is_none_or(|q| {
                p.name.to_lowercase().contains(q) || p.description.to_lowercase().contains(q)
            })
        })
        .filter(|p| {
            filter
                .price
                .is_none_or(|range| range.contains(p.price.amount()))
        })
        .collect();

    match filter.sort {
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.amount().cmp(&b.price.amount())),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.amount().cmp(&a.price.amount())),
        SortKey::NameAsc => out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Unsorted => {}
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::seed::product_fixture;

    use rust_decimal::Decimal;

    fn sample_catalog() -> Vec<Product> {
        let mut inactive = product_fixture(6, "Retro 90", "deportivas", 4500, 0);
        inactive.active = false;
        let mut featured = product_fixture(5, "Montana Boot", "botas", 17999, 6);
        featured.featured = true;

        vec![
            product_fixture(1, "Urban Runner", "deportivas", 8999, 12),
            product_fixture(2, "Trail Max", "deportivas", 12999, 8),
            product_fixture(3, "City Loafer", "casuales", 5999, 20),
            product_fixture(4, "Oxford Clasico", "formales", 15999, 5),
            featured,
            inactive,
        ]
    }

    #[test]
    fn test_inactive_products_hidden() {
        let out = filter_and_sort(sample_catalog(), &CatalogFilter::default());
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|p| p.active));
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let filter = CatalogFilter {
            search: Some("TRAIL".to_owned()),
            ..CatalogFilter::default()
        };
        let out = filter_and_sort(sample_catalog(), &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Trail Max");
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let filter = CatalogFilter {
            category: Some("Deportivas".to_owned()),
            ..CatalogFilter::default()
        };
        let out = filter_and_sort(sample_catalog(), &filter);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_featured_only() {
        let filter = CatalogFilter {
            featured_only: true,
            ..CatalogFilter::default()
        };
        let out = filter_and_sort(sample_catalog(), &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Montana Boot");
    }

    #[test]
    fn test_price_buckets_partition() {
        // 49.99 -> menos-50, 50.00 -> 50-100, 100.00 -> 50-100,
        // 100.01 -> 100-150, 150.00 -> 100-150, 150.01 -> 150-200.
        let cases = [
            ("49.99", "menos-50"),
            ("50.00", "50-100"),
            ("100.00", "50-100"),
            ("100.01", "100-150"),
            ("150.00", "100-150"),
            ("150.01", "150-200"),
            ("200.00", "150-200"),
        ];
        for (price, bucket) in cases {
            let price: Decimal = price.parse().unwrap();
            assert!(
                PriceRange::parse(bucket).contains(price),
                "{price} should fall in {bucket}"
            );
        }
        assert!(!PriceRange::parse("menos-50").contains(Decimal::from(50)));
        assert!(!PriceRange::parse("100-150").contains(Decimal::from(100)));
    }

    #[test]
    fn test_unknown_bucket_matches_everything() {
        let range = PriceRange::parse("mucho-dinero");
        assert!(range.contains(Decimal::ZERO));
        assert!(range.contains(Decimal::from(9999)));
    }

    #[test]
    fn test_sort_price_asc() {
        let filter = CatalogFilter {
            sort: SortKey::parse("precio-asc"),
            ..CatalogFilter::default()
        };
        let out = filter_and_sort(sample_catalog(), &filter);
        let prices: Vec<_> = out.iter().map(|p| p.price.amount()).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
    }

    #[test]
    fn test_sort_name_asc_case_insensitive() {
        let filter = CatalogFilter {
            sort: SortKey::NameAsc,
            ..CatalogFilter::default()
        };
        let out = filter_and_sort(sample_catalog(), &filter);
        assert_eq!(out[0].name, "City Loafer");
    }

    #[test]
    fn test_unknown_sort_keeps_catalog_order() {
        assert_eq!(SortKey::parse("rating-desc"), SortKey::Unsorted);
    }
}
