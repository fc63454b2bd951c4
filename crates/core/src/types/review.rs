//! Product reviews.

use serde::{Deserialize, Serialize};

use crate::types::{CreatorId, CustomerId, ProductNo, ReviewNo};

/// A review left by a customer on a purchased product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_no: ReviewNo,
    #[serde(default)]
    pub product_no: Option<ProductNo>,
    #[serde(default)]
    pub creator_id: Option<CreatorId>,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    #[serde(default)]
    pub review_content: String,
    /// Star rating, 1 to 5.
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub created_date: Option<String>,
}
