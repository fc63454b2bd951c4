//! Core types for Creator Market.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod catalog;
pub mod customer;
pub mod id;
pub mod order;
pub mod price;
pub mod review;
pub mod status;

pub use catalog::{Creator, Product, ProductImage};
pub use customer::{AccountUpdate, Customer, CustomerAccount};
pub use id::*;
pub use order::{Order, OrderItem};
pub use price::Price;
pub use review::Review;
pub use status::OrderStatus;
