//! Session-related types.
//!
//! The storefront keeps the customer identity snapshot handed over by the
//! login flow. It is read-only to every view.

/// Session keys for identity data.
pub mod keys {
    /// Key for storing the current customer's identity snapshot.
    pub const CURRENT_CUSTOMER: &str = "current_customer";
}
