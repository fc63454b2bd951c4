//! Order history snapshots.

use serde::{Deserialize, Serialize};

use crate::types::catalog::null_as_empty_vec;
use crate::types::customer::null_as_empty;
use crate::types::{CreatorId, OrderNo, OrderStatus, Price, ProductNo};

/// One order of a customer, placed with a single creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_no: OrderNo,
    /// ISO-8601 timestamp as sent by the backend.
    pub order_date: String,
    pub creator_id: CreatorId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub creator_name: String,
    /// `None` when the backend omits the status or sends `null`.
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub items: Vec<OrderItem>,
}

/// A purchased product as it was at order time.
///
/// Denormalized: it is not joined against the live product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_no: ProductNo,
    pub product_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    pub unit_price: Price,
}
