//! Order service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::order::{is_known_status, Order, OrderItem};
use crate::domain::value_objects::{CartLine, RecordId};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{OrderRepository, ProductRepository};

/// Turns cart lines into persisted orders and serves order queries
///
/// The caller identity is always passed in explicitly; the service never
/// reads request state.
pub struct OrderService<O, P>
where
    O: OrderRepository,
    P: ProductRepository,
{
    order_repository: Arc<O>,
    product_repository: Arc<P>,
}

impl<O, P> OrderService<O, P>
where
    O: OrderRepository,
    P: ProductRepository,
{
    pub fn new(order_repository: Arc<O>, product_repository: Arc<P>) -> Self {
        Self {
            order_repository,
            product_repository,
        }
    }

    /// Validate every line against the catalog and persist one pending order
    ///
    /// Lines are checked in submission order and the first bad reference
    /// aborts the whole order before anything is written. The submitted unit
    /// price is kept as is.
    ///
    /// # Errors
    ///
    /// * `ValidationError::InvalidProductReference` - Malformed product id
    /// * `ValidationError::UnknownProduct` - No such product
    /// * `DomainError::Storage` - Catalog lookup or order write failed
    pub async fn create_order(
        &self,
        user_id: RecordId,
        lines: Vec<CartLine>,
    ) -> DomainResult<Order> {
        debug!(%user_id, line_count = lines.len(), "Assembling order");

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let product_id = RecordId::parse_str(&line.product_id).map_err(|_| {
                debug!(reference = %line.product_id, "Rejected malformed product reference");
                ValidationError::InvalidProductReference {
                    reference: line.product_id.clone(),
                }
            })?;

            let Some(product) = self.product_repository.find_by_id(&product_id).await? else {
                debug!(%product_id, "Rejected unknown product");
                return Err(ValidationError::UnknownProduct {
                    reference: line.product_id,
                }
                .into());
            };

            if product.price != line.price {
                warn!(
                    %product_id,
                    submitted_price = line.price,
                    catalog_price = product.price,
                    "Order line price differs from catalog price"
                );
            }

            items.push(OrderItem {
                product_id,
                quantity: line.quantity,
                price: line.price,
            });
        }

        let order = Order::new(user_id, items);
        let order = self.order_repository.create(order).await?;

        info!(
            order_id = %order.id,
            %user_id,
            item_count = order.items.len(),
            total = order.total,
            "Order created"
        );
        Ok(order)
    }

    /// All orders owned by `user_id`
    pub async fn get_user_orders(&self, user_id: RecordId) -> DomainResult<Vec<Order>> {
        let orders = self.order_repository.find_by_user(&user_id).await?;
        debug!(%user_id, count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// One order owned by `user_id`
    ///
    /// An order owned by someone else is reported exactly like a missing one.
    pub async fn get_order(&self, user_id: RecordId, order_id: &str) -> DomainResult<Order> {
        let order_id = parse_order_id(order_id)?;
        self.order_repository
            .find_for_user(&order_id, &user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order"))
    }

    /// Overwrite an order's status
    ///
    /// No transition rules and no ownership check are applied; any non-empty
    /// status is written verbatim.
    pub async fn update_status(&self, order_id: &str, status: &str) -> DomainResult<()> {
        let order_id = parse_order_id(order_id)?;
        if status.is_empty() {
            return Err(ValidationError::required("Status").into());
        }
        if !is_known_status(status) {
            warn!(%order_id, status, "Setting unrecognized order status");
        }

        let matched = self
            .order_repository
            .update_status(&order_id, status, Utc::now())
            .await?;
        if !matched {
            return Err(DomainError::not_found("Order"));
        }

        info!(%order_id, status, "Order status updated");
        Ok(())
    }
}

/// Parse a caller-supplied order id, answering "Invalid order ID" when malformed
pub fn parse_order_id(raw: &str) -> Result<RecordId, ValidationError> {
    RecordId::parse_str(raw).map_err(|_| ValidationError::invalid_id("order ID", raw))
}
