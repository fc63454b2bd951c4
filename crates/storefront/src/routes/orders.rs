//! Order history route handlers.
//!
//! Lists the signed-in customer's orders, grouped by order, with links into
//! the review and Q&A entry forms for every purchased item.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use creator_market_core::{CustomerId, Order, OrderItem};
use tracing::instrument;
use url::form_urlencoded;

use crate::filters;
use crate::format::format_order_date;
use crate::middleware::OptionalCustomer;
use crate::routes::creators::PLACEHOLDER_PRODUCT_IMAGE;
use crate::state::AppState;

/// Review entry form.
pub const REVIEW_REGISTER_ROUTE: &str = "/review/register";

/// Q&A entry form.
pub const QNA_REGISTER_ROUTE: &str = "/qna/register";

/// Message shown in place of the list when orders cannot be loaded.
pub const LOAD_ORDERS_FAILED: &str = "There was a problem loading your order history.";

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub order_no: String,
    pub ordered_at: String,
    pub creator_name: String,
    pub status: String,
    pub items: Vec<OrderItemView>,
}

/// Order item display data for templates.
#[derive(Clone)]
pub struct OrderItemView {
    pub product_no: String,
    pub name: String,
    pub image_url: String,
    pub unit_price: String,
    pub review_href: String,
    pub qna_href: String,
}

impl OrderView {
    fn new(order: &Order, customer_id: Option<&CustomerId>) -> Self {
        Self {
            order_no: order.order_no.to_string(),
            ordered_at: format_order_date(&order.order_date),
            creator_name: order.creator_name.clone(),
            status: order
                .status
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemView::new(item, order, customer_id))
                .collect(),
        }
    }
}

impl OrderItemView {
    fn new(item: &OrderItem, order: &Order, customer_id: Option<&CustomerId>) -> Self {
        Self {
            product_no: item.product_no.to_string(),
            name: item.product_name.clone(),
            image_url: item
                .product_image
                .as_deref()
                .filter(|url| !url.is_empty())
                .unwrap_or(PLACEHOLDER_PRODUCT_IMAGE)
                .to_string(),
            unit_price: item.unit_price.grouped(),
            review_href: review_link(item, order, customer_id),
            qna_href: qna_link(item, order, customer_id),
        }
    }
}

/// Link to the review form carrying the item's context.
#[must_use]
pub fn review_link(item: &OrderItem, order: &Order, customer_id: Option<&CustomerId>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("productNo", &item.product_no.to_string())
        .append_pair("productName", &item.product_name)
        .append_pair("creatorId", order.creator_id.as_str());
    if let Some(id) = customer_id {
        query.append_pair("customerId", id.as_str());
    }
    format!("{REVIEW_REGISTER_ROUTE}?{}", query.finish())
}

/// Link to the Q&A form carrying the item's context.
#[must_use]
pub fn qna_link(item: &OrderItem, order: &Order, customer_id: Option<&CustomerId>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("productNo", &item.product_no.to_string())
        .append_pair("creatorId", order.creator_id.as_str());
    if let Some(id) = customer_id {
        query.append_pair("customerId", id.as_str());
    }
    format!("{QNA_REGISTER_ROUTE}?{}", query.finish())
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderView>,
    pub error: Option<&'static str>,
}

/// Display the order history.
///
/// Without an identity the backend is asked for the orders of an empty
/// customer id. A failed fetch replaces the list with an inline message.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    OptionalCustomer(customer): OptionalCustomer,
) -> impl IntoResponse {
    let customer_id = customer.as_ref().map(|c| &c.customer_id);
    let lookup_id = customer_id.cloned().unwrap_or_default();

    match state.backend().list_orders(&lookup_id).await {
        Ok(orders) => OrdersTemplate {
            orders: orders
                .iter()
                .map(|order| OrderView::new(order, customer_id))
                .collect(),
            error: None,
        },
        Err(e) => {
            tracing::error!(customer_id = %lookup_id, "Failed to fetch orders: {e}");
            OrdersTemplate {
                orders: Vec::new(),
                error: Some(LOAD_ORDERS_FAILED),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use creator_market_core::{CreatorId, OrderNo, OrderStatus, Price, ProductNo};

    use super::*;

    fn order(items: Vec<OrderItem>) -> Order {
        Order {
            order_no: OrderNo::new(101),
            order_date: "2024-03-05T09:07:00".to_string(),
            creator_id: CreatorId::from("studio a"),
            creator_name: "Studio A".to_string(),
            status: Some(OrderStatus::Delivered),
            items,
        }
    }

    fn item() -> OrderItem {
        OrderItem {
            product_no: ProductNo::new(7),
            product_name: "Mug & Cup".to_string(),
            product_image: None,
            unit_price: Price::from_won(12_500),
        }
    }

    #[test]
    fn test_review_link_carries_context() {
        let customer = CustomerId::from("kim@example.com");
        assert_eq!(
            review_link(&item(), &order(vec![]), Some(&customer)),
            "/review/register?productNo=7&productName=Mug+%26+Cup&creatorId=studio+a&customerId=kim%40example.com"
        );
    }

    #[test]
    fn test_qna_link_omits_product_name() {
        let customer = CustomerId::from("kim@example.com");
        assert_eq!(
            qna_link(&item(), &order(vec![]), Some(&customer)),
            "/qna/register?productNo=7&creatorId=studio+a&customerId=kim%40example.com"
        );
    }

    #[test]
    fn test_links_without_identity_omit_customer() {
        assert_eq!(
            qna_link(&item(), &order(vec![]), None),
            "/qna/register?productNo=7&creatorId=studio+a"
        );
    }

    #[test]
    fn test_order_view_formats_fields() {
        let view = OrderView::new(&order(vec![item()]), None);
        assert_eq!(view.ordered_at, "2024.03.05 09:07");
        assert_eq!(view.status, "DELIVERED");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].unit_price, "12,500");
        assert_eq!(view.items[0].image_url, PLACEHOLDER_PRODUCT_IMAGE);
    }

    #[test]
    fn test_missing_status_renders_blank() {
        let mut sparse = order(vec![]);
        sparse.status = None;
        assert_eq!(OrderView::new(&sparse, None).status, "");
    }

    #[test]
    fn test_order_without_items_still_renders() {
        let html = OrdersTemplate {
            orders: vec![OrderView::new(&order(vec![]), None)],
            error: None,
        }
        .render()
        .unwrap();
        assert!(html.contains("Studio A"));
        assert!(html.contains("2024.03.05 09:07"));
    }

    #[test]
    fn test_error_replaces_list() {
        let html = OrdersTemplate {
            orders: Vec::new(),
            error: Some(LOAD_ORDERS_FAILED),
        }
        .render()
        .unwrap();
        assert!(html.contains(LOAD_ORDERS_FAILED));
        assert!(!html.contains("order-card"));
    }
}
