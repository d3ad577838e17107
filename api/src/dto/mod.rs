pub mod auth;
pub mod order;
pub mod product;

use serde::{Deserialize, Serialize};

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use order::{
    CartLineRequest, CreateOrderRequest, OrderItemResponse, OrderResponse, UpdateStatusRequest,
};
pub use product::{ProductRequest, ProductResponse};

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
