//! # Storefront Core
//!
//! Domain layer for the storefront backend: entities, the document store
//! contract, repositories, and the identity, order and catalog services.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Order, OrderItem, Product, User};
pub use domain::value_objects::{
    AccessToken, AuthenticatedUser, CartLine, LoginCredentials, ProductDraft, RecordId,
    RegisterUser, UserProfile,
};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError, ValidationError};
pub use repositories::{
    Document, DocumentOrderRepository, DocumentProductRepository, DocumentStore,
    DocumentUserRepository, Filter, MemoryDocumentStore, OrderRepository, Patch,
    ProductRepository, UserRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, AuthorizationGuard, BcryptPasswordHasher, CatalogService,
    OrderService, PasswordHasher, TokenService, TokenServiceConfig,
};
