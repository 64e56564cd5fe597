//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use stepup_core::{Price, ProductId};

use crate::catalog::{CatalogFilter, PriceRange, SortKey, filter_and_sort};
use crate::error::{Result, StoreError};
use crate::images::resolve_image_url;
use crate::models::Product;
use crate::state::AppState;

/// Listing query parameters, all optional.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    /// Free-text search over name and description.
    pub q: Option<String>,
    /// Category name.
    pub categoria: Option<String>,
    /// Price bucket label.
    pub precio: Option<String>,
    /// Sort label.
    pub orden: Option<String>,
    /// Only featured products when truthy.
    pub destacados: Option<bool>,
}

impl From<ListingQuery> for CatalogFilter {
    fn from(query: ListingQuery) -> Self {
        Self {
            search: query.q.filter(|s| !s.trim().is_empty()),
            category: query.categoria.filter(|s| !s.trim().is_empty()),
            price: query.precio.as_deref().map(PriceRange::parse),
            featured_only: query.destacados.unwrap_or(false),
            sort: query.orden.as_deref().map(SortKey::parse).unwrap_or_default(),
        }
    }
}

/// Product display data with the image reference resolved to a URL.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub original_price: Option<Price>,
    pub on_sale: bool,
    pub stock: u32,
    pub image_url: String,
    pub featured: bool,
    pub category: String,
    pub sizes: Vec<u32>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let image_url = resolve_image_url(Some(&product.image_ref), &product.category.name);
        let on_sale = product.on_sale();
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            original_price: product.original_price,
            on_sale,
            stock: product.stock,
            image_url,
            featured: product.featured,
            category: product.category.name,
            sizes: product.sizes.into_iter().collect(),
        }
    }
}

/// Product listing, filtered and sorted by the query parameters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let filter = CatalogFilter::from(query);
    let products = filter_and_sort(state.products().list()?, &filter);
    Ok(Json(products.into_iter().map(ProductView::from).collect()))
}

/// Product detail. Inactive products are reported as missing.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let product = state
        .products()
        .get(id)?
        .filter(|p| p.active)
        .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductView::from(product)))
}
