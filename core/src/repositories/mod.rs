//! Repository interfaces and their document-store implementations.

pub mod order;
pub mod product;
pub mod store;
pub mod user;

pub use order::{DocumentOrderRepository, OrderRepository, ORDERS_COLLECTION};
pub use product::{DocumentProductRepository, ProductRepository, PRODUCTS_COLLECTION};
pub use store::{Document, DocumentStore, Filter, MemoryDocumentStore, Patch};
pub use user::{DocumentUserRepository, UserRepository, USERS_COLLECTION};
