//! Account settings route handlers.
//!
//! Shows the signed-in customer's contact and delivery address, lets them
//! edit it and saves it back to the backend on an explicit save. Postcode
//! lookup happens in the browser through the Daum postcode widget; its result
//! is posted back here to compose the stored address line.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use creator_market_core::{AccountUpdate, Customer, CustomerAccount, CustomerId};
use serde::Deserialize;
use tracing::instrument;

use crate::address::{LookedUpAddress, PostcodeResult};
use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::{OptionalCustomer, OptionalSessionTokens};
use crate::state::AppState;

/// Postcode widget script loaded by the settings page.
pub const POSTCODE_SCRIPT_URL: &str =
    "https://t1.daumcdn.net/mapjsapi/bundle/postcode/prod/postcode.v2.js";

/// Where cancel sends the customer.
pub const CANCEL_REDIRECT: &str = "/header/user";

/// Read-only identity fields shown on the page.
#[derive(Clone, Default)]
pub struct IdentityView {
    pub customer_id: String,
    pub name: String,
    pub profile_image: String,
}

impl From<&Customer> for IdentityView {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.customer_id.to_string(),
            name: customer.customer_name.clone(),
            profile_image: customer.customer_profile_image.clone().unwrap_or_default(),
        }
    }
}

/// Alert severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    /// CSS modifier and `data-kind` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One-shot notification shown after a save attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertView {
    pub kind: AlertKind,
    pub title: &'static str,
    pub text: &'static str,
}

impl AlertView {
    /// Shown when the token cookies are gone; no request was made.
    #[must_use]
    pub const fn session_expired() -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Login expired",
            text: "No login information found. Please sign in again.",
        }
    }

    /// Shown when the backend accepted the update.
    #[must_use]
    pub const fn saved() -> Self {
        Self {
            kind: AlertKind::Success,
            title: "Account settings",
            text: "Saved.",
        }
    }

    /// Shown when the backend call failed.
    #[must_use]
    pub const fn save_failed() -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Account settings",
            text: "Saving failed.",
        }
    }
}

/// Editable account fields as submitted by the settings form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountForm {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub detail_address: String,
}

impl From<CustomerAccount> for AccountForm {
    fn from(account: CustomerAccount) -> Self {
        Self {
            phone: account.customer_phone,
            zipcode: account.customer_zipcode,
            address: account.customer_addr,
            detail_address: account.customer_addr_detail,
        }
    }
}

impl From<&AccountForm> for AccountUpdate {
    fn from(form: &AccountForm) -> Self {
        Self {
            customer_phone: form.phone.clone(),
            customer_zipcode: form.zipcode.clone(),
            customer_addr: form.address.clone(),
            customer_addr_detail: form.detail_address.clone(),
        }
    }
}

/// Account settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/settings.html")]
pub struct AccountSettingsTemplate {
    pub identity: IdentityView,
    pub phone: String,
    pub zipcode: String,
    pub address: String,
    pub detail_address: String,
    pub alert: Option<AlertView>,
    pub postcode_script_url: &'static str,
}

impl AccountSettingsTemplate {
    fn new(customer: Option<&Customer>, form: AccountForm, alert: Option<AlertView>) -> Self {
        Self {
            identity: customer.map(IdentityView::from).unwrap_or_default(),
            phone: form.phone,
            zipcode: form.zipcode,
            address: form.address,
            detail_address: form.detail_address,
            alert,
            postcode_script_url: POSTCODE_SCRIPT_URL,
        }
    }
}

/// Zipcode and address inputs, re-rendered after a postcode lookup.
#[derive(Template, WebTemplate)]
#[template(path = "partials/address_fields.html")]
pub struct AddressFieldsTemplate {
    pub zipcode: String,
    pub address: String,
}

impl From<LookedUpAddress> for AddressFieldsTemplate {
    fn from(looked_up: LookedUpAddress) -> Self {
        Self {
            zipcode: looked_up.zipcode,
            address: looked_up.address,
        }
    }
}

/// Load the stored account fields for a customer.
///
/// Only the first row of the backend's list is used. An empty list or a
/// failed fetch leaves every field empty.
async fn load_account(state: &AppState, customer_id: &CustomerId) -> AccountForm {
    match state.backend().get_account(customer_id).await {
        Ok(rows) => rows.into_iter().next().map_or_else(
            || {
                tracing::warn!(customer_id = %customer_id, "No account data found");
                AccountForm::default()
            },
            AccountForm::from,
        ),
        Err(e) => {
            tracing::error!(customer_id = %customer_id, "Failed to fetch account data: {e}");
            AccountForm::default()
        }
    }
}

/// Display the account settings page.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    OptionalCustomer(customer): OptionalCustomer,
) -> impl IntoResponse {
    let form = match &customer {
        Some(c) => load_account(&state, &c.customer_id).await,
        None => {
            tracing::warn!("No customer in session, showing empty account settings");
            AccountForm::default()
        }
    };

    AccountSettingsTemplate::new(customer.as_ref(), form, None)
}

/// Save the account settings.
///
/// Fails closed without calling the backend when either session token
/// cookie is missing. The submitted values are rendered back whatever the
/// outcome.
#[instrument(skip_all)]
pub async fn save(
    State(state): State<AppState>,
    OptionalCustomer(customer): OptionalCustomer,
    OptionalSessionTokens(tokens): OptionalSessionTokens,
    Form(form): Form<AccountForm>,
) -> impl IntoResponse {
    let Some(tokens) = tokens else {
        tracing::warn!("Account save rejected: session token cookies missing");
        return AccountSettingsTemplate::new(
            customer.as_ref(),
            form,
            Some(AlertView::session_expired()),
        );
    };

    let customer_id = customer
        .as_ref()
        .map(|c| c.customer_id.clone())
        .unwrap_or_default();

    let update = AccountUpdate::from(&form);
    let alert = match state
        .backend()
        .update_account(&customer_id, &update, &tokens)
        .await
    {
        Ok(()) => {
            add_breadcrumb(
                "account",
                "Saved account settings",
                Some(&[("customer_id", customer_id.as_str())]),
            );
            tracing::info!(customer_id = %customer_id, "Account settings saved");
            AlertView::saved()
        }
        Err(e) => {
            tracing::error!(customer_id = %customer_id, "Failed to save account settings: {e}");
            AlertView::save_failed()
        }
    };

    AccountSettingsTemplate::new(customer.as_ref(), form, Some(alert))
}

/// Compose the address picked in the postcode widget (fragment).
///
/// The detail address is not part of the lookup and stays as typed.
#[instrument(skip_all)]
pub async fn lookup_address(Json(result): Json<PostcodeResult>) -> impl IntoResponse {
    tracing::debug!(zonecode = %result.zonecode, address_type = %result.address_type, "Postcode picked");
    AddressFieldsTemplate::from(LookedUpAddress::from(&result))
}

/// Leave the settings page without saving.
pub async fn cancel() -> Redirect {
    Redirect::to(CANCEL_REDIRECT)
}
