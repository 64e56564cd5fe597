//! Newtype wrappers for domain primitives.
//!
//! These types prevent unit mixups (an order ID is not a product ID, a price
//! is not a bare decimal) and centralize the validation rules the storefront
//! relies on.

pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{CategoryId, OrderId, ProductId, UserId};
pub use price::{Price, PriceError};
pub use status::{InvalidTransition, OrderStatus, UserRole};
