//! Order aggregate and its line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// Status every new order starts in
pub const ORDER_STATUS_PENDING: &str = "pending";

/// Statuses the storefront uses; others are accepted but unusual
pub const KNOWN_ORDER_STATUSES: [&str; 5] =
    ["pending", "processing", "shipped", "delivered", "cancelled"];

pub fn is_known_status(status: &str) -> bool {
    KNOWN_ORDER_STATUSES.contains(&status)
}

/// A purchased line with the unit price captured at order time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: RecordId,
    pub quantity: i64,
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub user_id: RecordId,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// New pending order; the total is derived from the items
    pub fn new(user_id: RecordId, items: Vec<OrderItem>) -> Self {
        let now = Utc::now();
        let total = items
            .iter()
            .fold(0.0, |total, item| total + item.line_total());
        Self {
            id: RecordId::new(),
            user_id,
            items,
            total,
            status: ORDER_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
