//! Order repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::order::Order;
use crate::domain::value_objects::RecordId;
use crate::errors::DomainError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order in a single write
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Every order placed by `user_id`, possibly empty
    async fn find_by_user(&self, user_id: &RecordId) -> Result<Vec<Order>, DomainError>;

    /// The order if it exists and belongs to `user_id`
    async fn find_for_user(
        &self,
        order_id: &RecordId,
        user_id: &RecordId,
    ) -> Result<Option<Order>, DomainError>;

    /// Overwrite status and modification time; `Ok(false)` when no order matched
    async fn update_status(
        &self,
        order_id: &RecordId,
        status: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
