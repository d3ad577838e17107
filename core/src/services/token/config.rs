//! Configuration for the token service

use ec_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{JWT_ISSUER, TOKEN_EXPIRY_HOURS};

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token lifetime in hours
    pub token_expiry_hours: i64,
    /// Issuer written to and required from every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: ec_shared::config::DEVELOPMENT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_hours: TOKEN_EXPIRY_HOURS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            token_expiry_hours: config.expiry_hours,
            issuer: config.issuer.clone(),
        }
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("token_expiry_hours", &self.token_expiry_hours)
            .field("issuer", &self.issuer)
            .finish()
    }
}
