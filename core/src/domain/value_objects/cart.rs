//! Order submission input.

use serde::{Deserialize, Serialize};

/// One requested line of an order before validation.
///
/// `product_id` is the raw reference from the client and may not be a
/// well-formed identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i64,
    pub price: f64,
}

impl CartLine {
    pub fn new(product_id: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }
}
