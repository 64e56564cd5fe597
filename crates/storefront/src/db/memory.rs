//! In-memory store implementations.
//!
//! `RwLock`-guarded maps with atomic ID assignment. Single-process only;
//! real persistence is a deployment concern outside this core.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use stepup_core::{Email, OrderId, OrderStatus, ProductId, UserId};

use super::{OrderStore, ProductStore, RepositoryError, UserStore};
use crate::models::{NewOrder, NewUser, Order, Product, User};

fn poisoned() -> RepositoryError {
    RepositoryError::Storage("lock poisoned".to_owned())
}

/// In-memory product catalog.
#[derive(Debug, Default)]
pub struct MemoryProducts {
    products: RwLock<BTreeMap<ProductId, Product>>,
}

impl MemoryProducts {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the lock is poisoned.
    pub fn put(&self, product: Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.id, product);
        Ok(())
    }
}

impl ProductStore for MemoryProducts {
    fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.values().cloned().collect())
    }
}

/// In-memory order store.
#[derive(Debug, Default)]
pub struct MemoryOrders {
    next_id: AtomicI64,
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrders {
    /// Create an empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            orders: RwLock::new(Vec::new()),
        }
    }
}

impl OrderStore for MemoryOrders {
    fn insert(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let id = OrderId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let order = order.with_id(id);

        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        orders.push(order.clone());
        Ok(order)
    }

    fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.iter().find(|order| order.id == id).cloned())
    }

    fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        let mut result: Vec<Order> = orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect();
        // Tie-break on id so same-instant orders still list newest first.
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(result)
    }

    fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        if let Some(order) = orders.iter_mut().find(|order| order.id == id) {
            order.status = status;
        }
        Ok(())
    }
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct MemoryUsers {
    next_id: AtomicI64,
    users: RwLock<BTreeMap<UserId, User>>,
}

impl MemoryUsers {
    /// Create an empty user store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            users: RwLock::new(BTreeMap::new()),
        }
    }
}

impl UserStore for MemoryUsers {
    fn get(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(&id).cloned())
    }

    fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.values().find(|user| &user.email == email).cloned())
    }

    fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {}",
                user.email
            )));
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let user = user.with_id(id);
        users.insert(id, user.clone());
        Ok(user)
    }

    fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), RepositoryError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        if let Some(user) = users.get_mut(&id) {
            user.last_login = Some(at);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::seed;
    use stepup_core::{Price, UserRole};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ana".to_owned(),
            email: Email::parse(email).unwrap(),
            password_hash: "$argon2id$stub".to_owned(),
            role: UserRole::Customer,
            active: true,
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn test_products_put_and_get() {
        let store = MemoryProducts::new();
        let product = seed::product_fixture(1, "Runner", "deportivas", 4999, 10);
        store.put(product.clone()).unwrap();

        let found = store.get(ProductId::new(1)).unwrap().unwrap();
        assert_eq!(found.name, product.name);
        assert!(store.get(ProductId::new(99)).unwrap().is_none());
    }

    #[test]
    fn test_orders_assign_sequential_ids() {
        let store = MemoryOrders::new();
        let user_id = UserId::new(1);
        let draft = |number: &str| NewOrder {
            number: number.to_owned(),
            user_id,
            lines: Vec::new(),
            total: Price::ZERO,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let first = store.insert(draft("PED1")).unwrap();
        let second = store.insert(draft("PED2")).unwrap();
        assert_eq!(first.id, OrderId::new(1));
        assert_eq!(second.id, OrderId::new(2));

        let listed = store.list_for_user(user_id).unwrap();
        assert_eq!(listed.len(), 2);
        // Newest first
        assert!(listed.first().unwrap().created_at >= listed.last().unwrap().created_at);
    }

    #[test]
    fn test_orders_set_status() {
        let store = MemoryOrders::new();
        let order = store
            .insert(NewOrder {
                number: "PED1".to_owned(),
                user_id: UserId::new(1),
                lines: Vec::new(),
                total: Price::ZERO,
                status: OrderStatus::Pending,
                created_at: Utc::now(),
            })
            .unwrap();

        store.set_status(order.id, OrderStatus::Cancelled).unwrap();
        let stored = store.get(order.id).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_users_duplicate_email_conflict() {
        let store = MemoryUsers::new();
        store.insert(new_user("ana@example.com")).unwrap();

        let err = store.insert(new_user("ana@example.com")).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[test]
    fn test_users_record_login() {
        let store = MemoryUsers::new();
        let user = store.insert(new_user("ana@example.com")).unwrap();
        assert!(user.last_login.is_none());

        let at = Utc::now();
        store.record_login(user.id, at).unwrap();
        assert_eq!(store.get(user.id).unwrap().unwrap().last_login, Some(at));
    }
}
