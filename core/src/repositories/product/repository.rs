//! Product repository over a document store

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::product::Product;
use crate::domain::value_objects::RecordId;
use crate::errors::DomainError;
use crate::repositories::store::{
    from_document, to_document, DocumentStore, Filter, Patch, ID_FIELD,
};

use super::trait_::ProductRepository;

/// Collection holding product documents
pub const PRODUCTS_COLLECTION: &str = "products";

pub struct DocumentProductRepository<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> DocumentProductRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore> ProductRepository for DocumentProductRepository<S> {
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Product>, DomainError> {
        self.store
            .find_one(PRODUCTS_COLLECTION, &Filter::by_id(id))
            .await?
            .map(from_document::<Product>)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.store
            .find_many(PRODUCTS_COLLECTION, &Filter::new())
            .await?
            .into_iter()
            .map(from_document::<Product>)
            .collect()
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        self.store
            .insert(PRODUCTS_COLLECTION, to_document(&product)?)
            .await?;
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<bool, DomainError> {
        let mut fields = to_document(product)?;
        fields.remove(ID_FIELD);
        fields.remove("created_at");
        let matched = self
            .store
            .update_one(PRODUCTS_COLLECTION, &Filter::by_id(&product.id), &Patch::from(fields))
            .await?;
        Ok(matched > 0)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, DomainError> {
        let deleted = self
            .store
            .delete_one(PRODUCTS_COLLECTION, &Filter::by_id(id))
            .await?;
        Ok(deleted > 0)
    }
}
