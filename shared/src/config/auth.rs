//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Secret used when JWT_SECRET is not set; only acceptable outside production
pub const DEVELOPMENT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret for HS256 signing
    pub secret: String,

    /// Token lifetime in hours
    pub expiry_hours: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEVELOPMENT_JWT_SECRET),
            expiry_hours: 24,
            issuer: String::from("storefront"),
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.expiry_hours = hours;
        self
    }

    /// Check if using the built-in development secret
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor
    pub password_hash_cost: u32,

    /// Minimum password length in characters
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password_hash_cost: 12,
            min_password_length: 6,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt: JwtConfig {
                secret: env_or("JWT_SECRET", defaults.jwt.secret),
                expiry_hours: env_or("JWT_EXPIRY_HOURS", defaults.jwt.expiry_hours),
                issuer: env_or("JWT_ISSUER", defaults.jwt.issuer),
            },
            password_hash_cost: env_or("BCRYPT_COST", defaults.password_hash_cost),
            min_password_length: defaults.min_password_length,
        }
    }
}
