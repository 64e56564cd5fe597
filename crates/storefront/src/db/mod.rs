//! Storage traits and their in-memory implementations.
//!
//! The storefront core treats persistence as an external collaborator: a
//! product lookup, an order sink, and a user lookup, each behind a trait.
//! Handlers and services depend only on the traits; [`memory`] provides the
//! in-process implementations this deployment runs on, and [`seed`] a demo
//! catalog.

pub mod memory;
pub mod seed;

use stepup_core::{Email, OrderId, OrderStatus, ProductId, UserId};

use crate::models::{NewOrder, NewUser, Order, Product, User};

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A uniqueness constraint was violated (e.g. duplicate email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Product lookup.
pub trait ProductStore: Send + Sync {
    /// Fetch one product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// List every product, active or not. Callers filter.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn list(&self) -> Result<Vec<Product>, RepositoryError>;
}

/// Order persistence sink.
pub trait OrderStore: Send + Sync {
    /// Persist an order draft, assigning its ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails; callers
    /// treat a failed insert as "order not placed".
    fn insert(&self, order: NewOrder) -> Result<Order, RepositoryError>;

    /// Fetch one order by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Orders placed by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError>;

    /// Overwrite an order's lifecycle status. Callers validate the
    /// transition first.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<(), RepositoryError>;
}

/// User lookup and registration.
pub trait UserStore: Send + Sync {
    /// Fetch one user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn get(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Fetch one user by email.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Persist a user draft, assigning its ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the email is already
    /// registered.
    fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Record a successful login time.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the store fails.
    fn record_login(
        &self,
        id: UserId,
        at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), RepositoryError>;
}
