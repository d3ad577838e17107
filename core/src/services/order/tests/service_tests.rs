//! Unit tests for order service

use std::sync::Arc;

use crate::domain::entities::product::Product;
use crate::domain::value_objects::{CartLine, ProductDraft, RecordId};
use crate::errors::{DomainError, ErrorKind, ValidationError};
use crate::repositories::store::MemoryDocumentStore;
use crate::repositories::{
    DocumentOrderRepository, DocumentProductRepository, OrderRepository, ProductRepository,
    ORDERS_COLLECTION,
};
use crate::services::order::OrderService;

use super::mocks::FailingOrderRepository;

type TestOrderService = OrderService<
    DocumentOrderRepository<MemoryDocumentStore>,
    DocumentProductRepository<MemoryDocumentStore>,
>;

struct Fixture {
    service: TestOrderService,
    store: Arc<MemoryDocumentStore>,
    orders: Arc<DocumentOrderRepository<MemoryDocumentStore>>,
    products: Arc<DocumentProductRepository<MemoryDocumentStore>>,
}

fn create_test_service() -> Fixture {
    let store = Arc::new(MemoryDocumentStore::new());
    let orders = Arc::new(DocumentOrderRepository::new(store.clone()));
    let products = Arc::new(DocumentProductRepository::new(store.clone()));
    Fixture {
        service: OrderService::new(orders.clone(), products.clone()),
        store,
        orders,
        products,
    }
}

async fn add_product(
    products: &DocumentProductRepository<MemoryDocumentStore>,
    name: &str,
    price: f64,
) -> Product {
    products
        .create(Product::from_draft(ProductDraft {
            name: name.to_string(),
            description: String::new(),
            price,
            stock: 10,
            category: String::new(),
        }))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_order_success() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;
    let user_id = RecordId::new();

    let order = fx
        .service
        .create_order(user_id, vec![CartLine::new(mug.id.to_hex(), 2, 9.99)])
        .await
        .unwrap();

    assert_eq!(order.user_id, user_id);
    assert_eq!(order.status, "pending");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_id, mug.id);
    assert_eq!(order.items[0].quantity, 2);
    assert!((order.total - 19.98).abs() < 1e-9);
    assert_eq!(order.created_at, order.updated_at);

    let stored = fx.orders.find_for_user(&order.id, &user_id).await.unwrap();
    assert_eq!(stored, Some(order));
}

#[tokio::test]
async fn test_items_preserve_submission_order() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;
    let pan = add_product(&fx.products, "Pan", 24.5).await;

    let order = fx
        .service
        .create_order(
            RecordId::new(),
            vec![
                CartLine::new(pan.id.to_hex(), 1, 24.5),
                CartLine::new(mug.id.to_hex(), 3, 9.99),
            ],
        )
        .await
        .unwrap();

    assert_eq!(order.items[0].product_id, pan.id);
    assert_eq!(order.items[1].product_id, mug.id);
    assert!((order.total - (24.5 + 3.0 * 9.99)).abs() < 1e-9);
}

#[tokio::test]
async fn test_submitted_price_is_kept() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;

    let order = fx
        .service
        .create_order(RecordId::new(), vec![CartLine::new(mug.id.to_hex(), 2, 0.01)])
        .await
        .unwrap();

    assert_eq!(order.items[0].price, 0.01);
    assert!((order.total - 0.02).abs() < 1e-9);
}

#[tokio::test]
async fn test_malformed_reference_aborts_order() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;

    let result = fx
        .service
        .create_order(
            RecordId::new(),
            vec![
                CartLine::new(mug.id.to_hex(), 1, 9.99),
                CartLine::new("not-a-valid-id", 1, 1.0),
            ],
        )
        .await;

    match result {
        Err(DomainError::ValidationErr(ValidationError::InvalidProductReference { reference })) => {
            assert_eq!(reference, "not-a-valid-id")
        }
        other => panic!("expected invalid product reference, got {:?}", other),
    }
    assert_eq!(fx.store.count(ORDERS_COLLECTION).await, 0);
}

#[tokio::test]
async fn test_unknown_product_aborts_order() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;
    let missing = RecordId::new().to_hex();

    let result = fx
        .service
        .create_order(
            RecordId::new(),
            vec![
                CartLine::new(missing.clone(), 1, 1.0),
                CartLine::new(mug.id.to_hex(), 1, 9.99),
            ],
        )
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), format!("Product not found: {}", missing));
    assert_eq!(fx.store.count(ORDERS_COLLECTION).await, 0);
}

#[tokio::test]
async fn test_empty_order_is_accepted() {
    let fx = create_test_service();
    let order = fx.service.create_order(RecordId::new(), vec![]).await.unwrap();
    assert_eq!(order.total, 0.0);
    assert!(order.total.is_sign_positive());
    assert_eq!(order.status, "pending");
}

#[tokio::test]
async fn test_storage_failure_on_write() {
    let store = Arc::new(MemoryDocumentStore::new());
    let products = Arc::new(DocumentProductRepository::new(store));
    let orders = Arc::new(FailingOrderRepository::default());
    let mug = add_product(&products, "Mug", 9.99).await;
    let service = OrderService::new(orders.clone(), products);

    let err = service
        .create_order(RecordId::new(), vec![CartLine::new(mug.id.to_hex(), 1, 9.99)])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert_eq!(orders.create_calls(), 1);

    // validation failures never reach the store
    let _ = service
        .create_order(RecordId::new(), vec![CartLine::new("bad", 1, 1.0)])
        .await;
    assert_eq!(orders.create_calls(), 1);
}

#[tokio::test]
async fn test_get_user_orders() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;
    let alice = RecordId::new();
    let bob = RecordId::new();

    assert!(fx.service.get_user_orders(alice).await.unwrap().is_empty());

    let line = || vec![CartLine::new(mug.id.to_hex(), 1, 9.99)];
    let first = fx.service.create_order(alice, line()).await.unwrap();
    fx.service.create_order(bob, line()).await.unwrap();
    let second = fx.service.create_order(alice, line()).await.unwrap();

    let orders = fx.service.get_user_orders(alice).await.unwrap();
    assert_eq!(orders, vec![first, second]);
}

#[tokio::test]
async fn test_get_order_hides_other_users_orders() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;
    let alice = RecordId::new();
    let bob = RecordId::new();
    let order = fx
        .service
        .create_order(alice, vec![CartLine::new(mug.id.to_hex(), 1, 9.99)])
        .await
        .unwrap();

    let own = fx.service.get_order(alice, &order.id.to_hex()).await.unwrap();
    assert_eq!(own, order);

    let foreign = fx.service.get_order(bob, &order.id.to_hex()).await.unwrap_err();
    let missing = fx
        .service
        .get_order(alice, &RecordId::new().to_hex())
        .await
        .unwrap_err();
    assert_eq!(foreign.kind(), ErrorKind::NotFound);
    assert_eq!(foreign.to_string(), missing.to_string());
}

#[tokio::test]
async fn test_get_order_malformed_id() {
    let fx = create_test_service();
    let err = fx.service.get_order(RecordId::new(), "xyz").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Invalid order ID");
}

#[tokio::test]
async fn test_update_status() {
    let fx = create_test_service();
    let mug = add_product(&fx.products, "Mug", 9.99).await;
    let alice = RecordId::new();
    let order = fx
        .service
        .create_order(alice, vec![CartLine::new(mug.id.to_hex(), 1, 9.99)])
        .await
        .unwrap();

    fx.service.update_status(&order.id.to_hex(), "shipped").await.unwrap();
    let stored = fx.service.get_order(alice, &order.id.to_hex()).await.unwrap();
    assert_eq!(stored.status, "shipped");
    assert!(stored.updated_at >= order.updated_at);
    assert_eq!(stored.total, order.total);

    // no transition rules: going back and using unknown values is allowed
    fx.service.update_status(&order.id.to_hex(), "pending").await.unwrap();
    fx.service.update_status(&order.id.to_hex(), "teleported").await.unwrap();
    let stored = fx.service.get_order(alice, &order.id.to_hex()).await.unwrap();
    assert_eq!(stored.status, "teleported");

    // only the empty string is missing; whitespace is a value like any other
    fx.service.update_status(&order.id.to_hex(), "  ").await.unwrap();
    let stored = fx.service.get_order(alice, &order.id.to_hex()).await.unwrap();
    assert_eq!(stored.status, "  ");
}

#[tokio::test]
async fn test_update_status_errors() {
    let fx = create_test_service();

    let err = fx.service.update_status("xyz", "shipped").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = fx
        .service
        .update_status(&RecordId::new().to_hex(), "shipped")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = fx
        .service
        .update_status(&RecordId::new().to_hex(), "")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Status is required");

    // the order id is checked before the status
    let err = fx.service.update_status("xyz", "").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid order ID");
}
