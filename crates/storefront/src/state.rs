//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::{OrderStore, ProductStore, UserStore};

/// Application state, cheap to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    products: Arc<dyn ProductStore>,
    orders: Arc<dyn OrderStore>,
    users: Arc<dyn UserStore>,
}

impl AppState {
    /// Assemble the application state from its stores.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        products: Arc<dyn ProductStore>,
        orders: Arc<dyn OrderStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                orders,
                users,
            }),
        }
    }

    /// Server configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Product store.
    #[must_use]
    pub fn products(&self) -> &dyn ProductStore {
        self.inner.products.as_ref()
    }

    /// Order store.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        self.inner.orders.as_ref()
    }

    /// User store.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }
}
