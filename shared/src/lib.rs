//! Shared utilities and common types for the storefront server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - The outward error body and error codes
//! - String validators

pub mod config;
pub mod errors;
pub mod utils;

pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::validation;
