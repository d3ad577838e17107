use chrono::{DateTime, Utc};
use ec_core::{CartLine, Order, OrderItem};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct CartLineRequest {
    pub product_id: String,
    pub quantity: i64,
    pub price: f64,
}

/// Cart submission; `items` must be present but may be empty
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<CartLineRequest>,
}

impl CreateOrderRequest {
    pub fn into_cart_lines(self) -> Vec<CartLine> {
        self.items
            .into_iter()
            .map(|line| CartLine::new(line.product_id, line.quantity, line.price))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id.to_hex(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_hex(),
            user_id: order.user_id.to_hex(),
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            total: order.total,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
