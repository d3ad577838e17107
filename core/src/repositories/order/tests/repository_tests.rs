//! Tests for the document-backed order repository

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::order::{Order, OrderItem};
use crate::domain::value_objects::RecordId;
use crate::repositories::order::{DocumentOrderRepository, OrderRepository};
use crate::repositories::store::MemoryDocumentStore;

fn order_for(user_id: RecordId) -> Order {
    Order::new(
        user_id,
        vec![OrderItem {
            product_id: RecordId::new(),
            quantity: 2,
            price: 9.99,
        }],
    )
}

#[tokio::test]
async fn test_find_by_user_only_returns_own_orders() {
    let repo = DocumentOrderRepository::new(Arc::new(MemoryDocumentStore::new()));
    let alice = RecordId::new();
    let bob = RecordId::new();

    let first = repo.create(order_for(alice)).await.unwrap();
    let second = repo.create(order_for(alice)).await.unwrap();
    repo.create(order_for(bob)).await.unwrap();

    let orders = repo.find_by_user(&alice).await.unwrap();
    assert_eq!(orders, vec![first, second]);
    assert!(repo.find_by_user(&RecordId::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_for_user_requires_ownership() {
    let repo = DocumentOrderRepository::new(Arc::new(MemoryDocumentStore::new()));
    let alice = RecordId::new();
    let bob = RecordId::new();
    let order = repo.create(order_for(alice)).await.unwrap();

    assert_eq!(repo.find_for_user(&order.id, &alice).await.unwrap(), Some(order.clone()));
    assert!(repo.find_for_user(&order.id, &bob).await.unwrap().is_none());
    assert!(repo.find_for_user(&RecordId::new(), &alice).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_status() {
    let repo = DocumentOrderRepository::new(Arc::new(MemoryDocumentStore::new()));
    let alice = RecordId::new();
    let order = repo.create(order_for(alice)).await.unwrap();
    let later = Utc::now() + chrono::Duration::seconds(5);

    assert!(repo.update_status(&order.id, "shipped", later).await.unwrap());

    let stored = repo.find_for_user(&order.id, &alice).await.unwrap().unwrap();
    assert_eq!(stored.status, "shipped");
    assert_eq!(stored.updated_at, later);
    assert_eq!(stored.created_at, order.created_at);
    assert_eq!(stored.total, order.total);

    assert!(!repo.update_status(&RecordId::new(), "shipped", later).await.unwrap());
}
