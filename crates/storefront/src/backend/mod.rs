//! Commerce backend REST client.
//!
//! # Architecture
//!
//! - One method per resource, each issuing a single JSON request with `reqwest`
//! - The backend is the source of truth: no local sync, no response cache
//! - Each call is fire-once; there are no retries and no pagination
//!
//! # Endpoints
//!
//! ```text
//! GET {base}/review/list?creatorId&productNo  - reviews, both filters optional
//! GET {base}/product/list?creatorId           - products, filtered by creator
//! GET {base}/creator/list                     - every creator (no server filter)
//! GET {base}/customer/account?customerId      - account rows (first one is used)
//! PUT {base}/customer/{customerId}            - update contact and address
//! GET {base}/order/list?customerId            - order history
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use creator_market_storefront::backend::BackendClient;
//!
//! let client = BackendClient::new(&config.backend)?;
//! let products = client.list_products(Some(&creator_id)).await?;
//! ```

use std::sync::Arc;

use creator_market_core::{
    AccountUpdate, Creator, CreatorId, CustomerAccount, CustomerId, Order, Product, ProductNo,
    Review,
};
use reqwest::header::COOKIE;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::BackendConfig;
use crate::middleware::tokens::SessionTokens;

/// Longest slice of a response body kept in errors and logs.
const ERROR_BODY_LIMIT: usize = 200;

/// Errors that can occur when calling the commerce backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Backend returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL cannot carry resource paths.
    #[error("Backend base URL cannot be a base: {0}")]
    InvalidBaseUrl(Url),
}

/// Client for the commerce REST backend.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────

    /// List reviews, optionally narrowed to a creator and/or a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a review list.
    #[instrument(skip(self))]
    pub async fn list_reviews(
        &self,
        creator_id: Option<&CreatorId>,
        product_no: Option<ProductNo>,
    ) -> Result<Vec<Review>, BackendError> {
        let mut query = Vec::new();
        if let Some(id) = creator_id {
            query.push(("creatorId", id.to_string()));
        }
        if let Some(no) = product_no {
            query.push(("productNo", no.to_string()));
        }

        let url = self.endpoint(&["review", "list"], &query)?;
        self.get_json(url).await
    }

    /// List products, filtered server-side by creator when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a product list.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        creator_id: Option<&CreatorId>,
    ) -> Result<Vec<Product>, BackendError> {
        let query: Vec<_> = creator_id
            .map(|id| ("creatorId", id.to_string()))
            .into_iter()
            .collect();

        let url = self.endpoint(&["product", "list"], &query)?;
        self.get_json(url).await
    }

    /// List every creator. The backend offers no id filter for this list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a creator list.
    #[instrument(skip(self))]
    pub async fn list_creators(&self) -> Result<Vec<Creator>, BackendError> {
        let url = self.endpoint(&["creator", "list"], &[])?;
        self.get_json(url).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Customer
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the stored account rows of a customer.
    ///
    /// The backend answers with a list; callers use the first row.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an account list.
    #[instrument(skip(self))]
    pub async fn get_account(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<CustomerAccount>, BackendError> {
        let url = self.endpoint(
            &["customer", "account"],
            &[("customerId", customer_id.to_string())],
        )?;
        self.get_json(url).await
    }

    /// Update a customer's contact and address fields.
    ///
    /// The session tokens are forwarded as cookies so the backend can
    /// authorize the change. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, update, tokens))]
    pub async fn update_account(
        &self,
        customer_id: &CustomerId,
        update: &AccountUpdate,
        tokens: &SessionTokens,
    ) -> Result<(), BackendError> {
        let url = self.endpoint(&["customer", customer_id.as_str()], &[])?;

        let response = self
            .inner
            .client
            .put(url)
            .header(COOKIE, tokens.cookie_header())
            .json(update)
            .send()
            .await?;

        Self::check_status(response).await.map(drop)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Orders
    // ─────────────────────────────────────────────────────────────────────────

    /// List a customer's orders, each with its purchased items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an order list.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, customer_id: &CustomerId) -> Result<Vec<Order>, BackendError> {
        let url = self.endpoint(
            &["order", "list"],
            &[("customerId", customer_id.to_string())],
        )?;
        self.get_json(url).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Plumbing
    // ─────────────────────────────────────────────────────────────────────────

    /// Build `{base}/{segments...}?{query}`.
    ///
    /// Segments are percent-encoded; an empty segment is kept so a missing id
    /// still produces a request the backend can reject.
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, BackendError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BackendError::InvalidBaseUrl(self.inner.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// Issue a GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        tracing::debug!(%url, "backend GET");

        let response = self.inner.client.get(url).send().await?;
        let body = Self::check_status(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&body, 500),
                "Failed to parse backend response"
            );
            BackendError::Parse(e)
        })
    }

    /// Read the body, turning non-success statuses into errors.
    async fn check_status(response: reqwest::Response) -> Result<String, BackendError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&body, 500),
                "Backend returned non-success status"
            );
            return Err(BackendError::Status {
                status,
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        Ok(body)
    }
}

fn truncate(body: &str, limit: usize) -> String {
    body.chars().take(limit).collect()
}
