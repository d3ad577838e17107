//! Token service module for JWT management
//!
//! Access tokens are stateless: nothing is stored server side, so a token
//! stays valid until it expires.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
