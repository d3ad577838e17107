//! Authentication service module
//!
//! - Email and password registration
//! - Login issuing a bearer access token
//! - The authorization guard protecting order and catalog writes

mod config;
mod guard;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use guard::{extract_bearer_token, AuthorizationGuard};
pub use service::AuthService;
