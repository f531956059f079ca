//! Ubermelon
//!
//! Domain model for the Ubermelon shop: the melon catalog, the session cart,
//! and pricing a cart into a basket.

pub mod basket;
pub mod cart;
pub mod catalog;
pub mod melons;
pub mod notices;
pub mod pricing;
