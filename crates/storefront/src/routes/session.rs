//! Identity hand-off from the login flow.
//!
//! The login flow owns authentication. Once it has set the token cookies it
//! posts the customer snapshot here, and every later page reads it from the
//! session.

use axum::{Json, http::StatusCode};
use creator_market_core::Customer;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::{OptionalSessionTokens, clear_current_customer, set_current_customer};

/// Store the signed-in customer in the session.
///
/// Rejected with 401 unless both token cookies accompany the request.
#[instrument(skip_all)]
pub async fn store(
    session: Session,
    OptionalSessionTokens(tokens): OptionalSessionTokens,
    Json(customer): Json<Customer>,
) -> Result<StatusCode> {
    if tokens.is_none() {
        tracing::warn!("Identity hand-off without session token cookies");
        return Err(AppError::Unauthorized(
            "session token cookies missing".to_string(),
        ));
    }

    set_current_customer(&session, &customer).await?;
    set_sentry_user(&customer.customer_id);
    add_breadcrumb(
        "auth",
        "Customer identity stored",
        Some(&[("customer_id", customer.customer_id.as_str())]),
    );
    tracing::info!(customer_id = %customer.customer_id, "Customer identity stored");

    Ok(StatusCode::NO_CONTENT)
}

/// Forget the signed-in customer.
#[instrument(skip_all)]
pub async fn clear(session: Session) -> Result<StatusCode> {
    clear_current_customer(&session).await?;
    clear_sentry_user();
    tracing::info!("Customer identity cleared");

    Ok(StatusCode::NO_CONTENT)
}
