//! Business services containing domain logic and use cases.

pub mod auth;
pub mod catalog;
pub mod order;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, AuthorizationGuard};
pub use catalog::CatalogService;
pub use order::OrderService;
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use token::{TokenService, TokenServiceConfig};
