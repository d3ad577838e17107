use chrono::{DateTime, Utc};
use ec_core::{Product, ProductDraft};
use serde::{Deserialize, Serialize};

/// Body of product create and update
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category: String,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
            category: request.category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category: product.category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
