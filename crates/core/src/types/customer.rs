//! Customer identity and account contact data.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::CustomerId;

/// The logged-in customer's identity snapshot.
///
/// Owned by the login flow; the storefront only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Login identifier (an email address).
    pub customer_id: CustomerId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_name: String,
    #[serde(default)]
    pub customer_profile_image: Option<String>,
}

/// Stored contact and delivery address of a customer.
///
/// Every field defaults to an empty string when the backend omits it or
/// sends `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccount {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_zipcode: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_addr: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_addr_detail: String,
}

/// Body of the account update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub customer_phone: String,
    pub customer_zipcode: String,
    pub customer_addr: String,
    pub customer_addr_detail: String,
}

pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
