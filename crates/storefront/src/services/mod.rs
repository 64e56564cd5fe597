//! Services that wrap external collaborators.

pub mod auth;
