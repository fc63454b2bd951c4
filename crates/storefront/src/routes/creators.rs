//! Creator detail route handlers.
//!
//! A creator page shows the creator's banner, profile and product grid. The
//! backend has no creator-by-id endpoint, so the full creator list is fetched
//! and filtered here, concurrently with the creator's product list.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use creator_market_core::{Creator, CreatorId, Product, ProductNo, Review};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Where every product card links to.
///
/// This generic route ignores which product was clicked. Kept as-is until
/// the product detail routing contract is settled.
pub const PRODUCT_DETAIL_ROUTE: &str = "/creator/detail";

/// Banner shown when the creator has no background image.
pub const PLACEHOLDER_BANNER: &str = "https://via.placeholder.com/300x150";

/// Profile image shown when the creator has no logo.
pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/96x96";

/// Product image shown when the product has no images.
pub const PLACEHOLDER_PRODUCT_IMAGE: &str = "https://via.placeholder.com/150";

/// Favourite count shown on every creator page. Not backed by data yet.
pub const FAVORITE_COUNT_PLACEHOLDER: &str = "1,600";

/// Outcome of looking a creator up in the creator list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatorLookup {
    /// The creator list could not be fetched.
    Pending,
    /// The creator list was fetched and contains the id.
    Found(Creator),
    /// The creator list was fetched and does not contain the id.
    NotFound,
}

impl CreatorLookup {
    /// Pick the creator with `creator_id` out of the full list.
    #[must_use]
    pub fn resolve(creators: Vec<Creator>, creator_id: &CreatorId) -> Self {
        creators
            .into_iter()
            .find(|c| &c.creator_id == creator_id)
            .map_or(Self::NotFound, Self::Found)
    }
}

/// Creator display data for templates.
#[derive(Clone)]
pub struct CreatorView {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub banner_url: String,
}

impl From<&Creator> for CreatorView {
    fn from(creator: &Creator) -> Self {
        Self {
            id: creator.creator_id.to_string(),
            name: non_empty(creator.creator_name.as_deref())
                .unwrap_or("No creator name")
                .to_string(),
            logo_url: non_empty(creator.logo_img.as_deref())
                .unwrap_or(PLACEHOLDER_LOGO)
                .to_string(),
            banner_url: non_empty(creator.background_img.as_deref())
                .unwrap_or(PLACEHOLDER_BANNER)
                .to_string(),
        }
    }
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub product_no: String,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub href: &'static str,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            product_no: product.product_no.to_string(),
            name: product.product_name.clone(),
            price: product.product_price.grouped(),
            image_url: product
                .primary_image_url()
                .unwrap_or(PLACEHOLDER_PRODUCT_IMAGE)
                .to_string(),
            href: PRODUCT_DETAIL_ROUTE,
        }
    }
}

/// Review display data for templates.
#[derive(Clone)]
pub struct ReviewView {
    pub content: String,
    pub score: Option<u8>,
    pub author: String,
    pub written_at: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            content: review.review_content.clone(),
            score: review.score,
            author: review
                .customer_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            written_at: review.created_date.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Creator detail page template.
///
/// Exactly one of `creator` / `not_found` describes the lookup; when neither
/// is set the creator list has not resolved and a loading message is shown.
#[derive(Template, WebTemplate)]
#[template(path = "creators/show.html")]
pub struct CreatorShowTemplate {
    pub creator_id: String,
    pub creator: Option<CreatorView>,
    pub not_found: bool,
    pub products: Vec<ProductCardView>,
    pub favorite_count: &'static str,
}

impl CreatorShowTemplate {
    fn new(creator_id: &CreatorId, lookup: &CreatorLookup, products: &[Product]) -> Self {
        let creator = match lookup {
            CreatorLookup::Found(creator) => Some(CreatorView::from(creator)),
            CreatorLookup::Pending | CreatorLookup::NotFound => None,
        };

        Self {
            creator_id: creator_id.to_string(),
            creator,
            not_found: matches!(lookup, CreatorLookup::NotFound),
            products: products.iter().map(ProductCardView::from).collect(),
            favorite_count: FAVORITE_COUNT_PLACEHOLDER,
        }
    }
}

/// Creator reviews fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/reviews.html")]
pub struct ReviewsFragmentTemplate {
    pub reviews: Vec<ReviewView>,
}

/// Query parameters for the reviews fragment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    pub product_no: Option<i64>,
}

/// Display a creator page with its products.
///
/// Never renders an error page: a missing creator or a failed fetch leaves
/// the page in its placeholder state.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(creator_id): Path<String>,
) -> impl IntoResponse {
    let creator_id = CreatorId::new(creator_id);
    let backend = state.backend();

    let (creators, products) = tokio::join!(
        backend.list_creators(),
        backend.list_products(Some(&creator_id))
    );

    let lookup = match creators {
        Ok(creators) => CreatorLookup::resolve(creators, &creator_id),
        Err(e) => {
            tracing::error!(creator_id = %creator_id, "Failed to fetch creators: {e}");
            CreatorLookup::Pending
        }
    };
    if lookup == CreatorLookup::NotFound {
        tracing::warn!(creator_id = %creator_id, "Creator not found");
    }

    let products = products.unwrap_or_else(|e| {
        tracing::error!(creator_id = %creator_id, "Failed to fetch products: {e}");
        Vec::new()
    });

    CreatorShowTemplate::new(&creator_id, &lookup, &products)
}

/// Display the reviews of a creator (fragment).
#[instrument(skip(state))]
pub async fn reviews(
    State(state): State<AppState>,
    Path(creator_id): Path<String>,
    Query(query): Query<ReviewQuery>,
) -> impl IntoResponse {
    let creator_id = CreatorId::new(creator_id);

    let reviews = state
        .backend()
        .list_reviews(Some(&creator_id), query.product_no.map(ProductNo::new))
        .await
        .unwrap_or_else(|e| {
            tracing::error!(creator_id = %creator_id, "Failed to fetch reviews: {e}");
            Vec::new()
        });

    ReviewsFragmentTemplate {
        reviews: reviews.iter().map(ReviewView::from).collect(),
    }
}
