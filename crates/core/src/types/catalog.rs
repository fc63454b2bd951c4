//! Creator and product snapshots.

use serde::{Deserialize, Serialize};

use crate::types::{CreatorId, Price, ProductNo};

/// A creator (seller) as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub creator_id: CreatorId,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub logo_img: Option<String>,
    #[serde(default)]
    pub background_img: Option<String>,
}

/// One image of a product, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub product_image_url: String,
}

/// A product listed by a creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_no: ProductNo,
    pub product_name: String,
    pub product_price: Price,
    /// Ordered image list; may be empty or `null` on the wire.
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub creator_id: Option<CreatorId>,
}

impl Product {
    /// URL of the first image, if the product has one.
    #[must_use]
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|img| img.product_image_url.as_str())
            .filter(|url| !url.is_empty())
    }
}

pub(crate) fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
