//! Catalog service implementation

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::product::Product;
use crate::domain::value_objects::{ProductDraft, RecordId};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::ProductRepository;

pub struct CatalogService<P: ProductRepository> {
    product_repository: Arc<P>,
}

impl<P: ProductRepository> CatalogService<P> {
    pub fn new(product_repository: Arc<P>) -> Self {
        Self { product_repository }
    }

    pub async fn create_product(&self, draft: ProductDraft) -> DomainResult<Product> {
        draft.validate()?;
        let product = self
            .product_repository
            .create(Product::from_draft(draft))
            .await?;
        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub async fn list_products(&self) -> DomainResult<Vec<Product>> {
        self.product_repository.list().await
    }

    pub async fn get_product(&self, product_id: &str) -> DomainResult<Product> {
        let id = parse_product_id(product_id)?;
        self.find_existing(&id).await
    }

    /// Replace the mutable fields of a product, keeping its creation time
    pub async fn update_product(
        &self,
        product_id: &str,
        draft: ProductDraft,
    ) -> DomainResult<Product> {
        let id = parse_product_id(product_id)?;
        draft.validate()?;

        let mut product = self.find_existing(&id).await?;
        product.apply(draft);
        if !self.product_repository.update(&product).await? {
            return Err(DomainError::not_found("Product"));
        }

        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    pub async fn delete_product(&self, product_id: &str) -> DomainResult<()> {
        let id = parse_product_id(product_id)?;
        if !self.product_repository.delete(&id).await? {
            return Err(DomainError::not_found("Product"));
        }
        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn find_existing(&self, id: &RecordId) -> DomainResult<Product> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))
    }
}

fn parse_product_id(raw: &str) -> Result<RecordId, ValidationError> {
    RecordId::parse_str(raw).map_err(|_| ValidationError::invalid_id("product ID", raw))
}
