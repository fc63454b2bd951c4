//! Customer identity extractor.
//!
//! Identity is owned by the login flow. Handlers only read the snapshot
//! stored in the session; they never create or refresh it themselves.

use axum::{extract::FromRequestParts, http::request::Parts};
use creator_market_core::Customer;
use tower_sessions::Session;

use crate::models::session_keys;

/// Extractor that optionally gets the current customer.
///
/// Does not reject the request when nobody is signed in.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     OptionalCustomer(customer): OptionalCustomer,
/// ) -> impl IntoResponse {
///     match customer {
///         Some(c) => format!("Hello, {}!", c.customer_name),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct OptionalCustomer(pub Option<Customer>);

impl<S> FromRequestParts<S> for OptionalCustomer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Customer>(session_keys::CURRENT_CUSTOMER)
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Failed to read customer from session");
                    None
                }),
            None => None,
        };

        Ok(Self(customer))
    }
}

/// Helper to store the current customer in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_customer(
    session: &Session,
    customer: &Customer,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_CUSTOMER, customer)
        .await
}

/// Helper to clear the current customer from the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_customer(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<Customer>(session_keys::CURRENT_CUSTOMER)
        .await?;
    Ok(())
}
