//! Creator Market Core - Shared domain types.
//!
//! This crate holds the snapshots the storefront exchanges with the commerce
//! backend: creators, products, customers, orders and reviews.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every type
//! deserializes from the backend's camelCase JSON.
//!
//! # Modules
//!
//! - [`types`] - Typed ids, prices, statuses and entity snapshots

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
