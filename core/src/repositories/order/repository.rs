//! Order repository over a document store

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::order::Order;
use crate::domain::value_objects::RecordId;
use crate::errors::DomainError;
use crate::repositories::store::{from_document, to_document, DocumentStore, Filter, Patch};

use super::trait_::OrderRepository;

/// Collection holding order documents
pub const ORDERS_COLLECTION: &str = "orders";

pub struct DocumentOrderRepository<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> DocumentOrderRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore> OrderRepository for DocumentOrderRepository<S> {
    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        self.store
            .insert(ORDERS_COLLECTION, to_document(&order)?)
            .await?;
        Ok(order)
    }

    async fn find_by_user(&self, user_id: &RecordId) -> Result<Vec<Order>, DomainError> {
        let filter = Filter::new().eq("user_id", user_id.to_hex());
        self.store
            .find_many(ORDERS_COLLECTION, &filter)
            .await?
            .into_iter()
            .map(from_document::<Order>)
            .collect()
    }

    async fn find_for_user(
        &self,
        order_id: &RecordId,
        user_id: &RecordId,
    ) -> Result<Option<Order>, DomainError> {
        let filter = Filter::by_id(order_id).eq("user_id", user_id.to_hex());
        self.store
            .find_one(ORDERS_COLLECTION, &filter)
            .await?
            .map(from_document::<Order>)
            .transpose()
    }

    async fn update_status(
        &self,
        order_id: &RecordId,
        status: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let patch = Patch::new()
            .set("status", status)
            .set("updated_at", json!(updated_at));
        let matched = self
            .store
            .update_one(ORDERS_COLLECTION, &Filter::by_id(order_id), &patch)
            .await?;
        Ok(matched > 0)
    }
}
