//! Catalog write input.

use ec_shared::validation::validators;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Mutable fields of a product as submitted for create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub category: String,
}

impl ProductDraft {
    /// First failing rule wins: name, price, stock
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !validators::not_blank(&self.name) {
            return Err(ValidationError::required("Product name"));
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(ValidationError::OutOfRange {
                field: "Product price".to_string(),
                constraint: "must be greater than 0".to_string(),
            });
        }
        if self.stock < 0 {
            return Err(ValidationError::OutOfRange {
                field: "Product stock".to_string(),
                constraint: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
