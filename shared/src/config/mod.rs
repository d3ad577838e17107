//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT and password hashing configuration
//! - `database` - Document store connection configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, DEVELOPMENT_JWT_SECRET};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Read an environment variable, falling back to `default` when unset or unparsable
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Configuration problems detected before the server starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in {environment}")]
    MissingJwtSecret { environment: Environment },

    #[error("JWT expiry must be positive, got {hours} hours")]
    InvalidTokenExpiry { hours: i64 },

    #[error("bcrypt cost must be between 4 and 31, got {cost}")]
    InvalidHashCost { cost: u32 },

    #[error("database name must not be empty")]
    MissingDatabaseName,
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(!environment.is_production()),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Reject settings the server must not start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let jwt = &self.auth.jwt;
        let weak_secret = jwt.secret.is_empty() || jwt.is_using_default_secret();
        if self.environment.is_production() && weak_secret {
            return Err(ConfigError::MissingJwtSecret {
                environment: self.environment,
            });
        }
        if jwt.expiry_hours <= 0 {
            return Err(ConfigError::InvalidTokenExpiry {
                hours: jwt.expiry_hours,
            });
        }
        if !(4..=31).contains(&self.auth.password_hash_cost) {
            return Err(ConfigError::InvalidHashCost {
                cost: self.auth.password_hash_cost,
            });
        }
        if self.database.name.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseName);
        }
        Ok(())
    }
}
