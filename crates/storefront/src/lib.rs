//! StepUp Storefront library.
//!
//! Domain services for a shoe storefront: catalog filtering, a session-scoped
//! shopping cart, pricing, checkout, and image URL resolution, plus the thin
//! axum JSON surface that exposes them. The services themselves are
//! framework-free: each takes explicit state and returns a plain
//! `Result<_, StoreError>`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod db;
pub mod error;
pub mod images;
pub mod middleware;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod services;
pub mod state;
