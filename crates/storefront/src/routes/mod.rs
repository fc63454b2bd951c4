//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//! GET  /health/ready                    - Readiness check (backend reachable)
//!
//! # Creators
//! GET  /creators/:creator_id            - Creator detail page
//! GET  /creators/:creator_id/reviews    - Creator reviews (fragment)
//!
//! # Account
//! GET  /account/settings                - Account settings page
//! POST /account/settings                - Save account settings
//! POST /account/settings/address        - Compose a postcode lookup (fragment)
//! GET  /account/settings/cancel         - Leave settings without saving
//! GET  /account/orders                  - Order history
//!
//! # Identity hand-off
//! POST /auth/session                    - Store the signed-in customer
//! POST /auth/session/clear              - Forget the signed-in customer
//! ```

pub mod account;
pub mod creators;
pub mod orders;
pub mod session;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the creator routes router.
pub fn creator_routes() -> Router<AppState> {
    Router::new()
        .route("/{creator_id}", get(creators::show))
        .route("/{creator_id}/reviews", get(creators::reviews))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(account::show).post(account::save))
        .route("/settings/address", post(account::lookup_address))
        .route("/settings/cancel", get(account::cancel))
        .route("/orders", get(orders::index))
}

/// Create the identity hand-off routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(session::store))
        .route("/clear", post(session::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/creators", creator_routes())
        .nest("/account", account_routes())
        .nest("/auth/session", session_routes())
}
