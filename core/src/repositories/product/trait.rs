//! Product repository trait.
//!
//! `find_by_id` is the catalog lookup order assembly depends on; the rest
//! backs catalog management.

use async_trait::async_trait;

use crate::domain::entities::product::Product;
use crate::domain::value_objects::RecordId;
use crate::errors::DomainError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by identifier; `Ok(None)` when absent
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Product>, DomainError>;

    /// All products in store order
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Rewrite the mutable fields of an existing product; `Ok(false)` when absent
    async fn update(&self, product: &Product) -> Result<bool, DomainError>;

    /// `Ok(false)` when absent
    async fn delete(&self, id: &RecordId) -> Result<bool, DomainError>;
}
