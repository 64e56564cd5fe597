//! Domain models for the storefront.

pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartCount, CartItem, MAX_UNITS_PER_LINE};
pub use order::{NewOrder, Order, OrderLine};
pub use product::{Category, Product};
pub use session::{CurrentUser, session_keys};
pub use user::{NewUser, User};
