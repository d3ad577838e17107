//! Bearer token authorization for protected operations

use std::sync::Arc;

use tracing::debug;

use crate::domain::value_objects::AuthenticatedUser;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::services::token::TokenService;

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Stateless check that a request carries a valid access token
#[derive(Clone)]
pub struct AuthorizationGuard {
    token_service: Arc<TokenService>,
}

impl AuthorizationGuard {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Resolve the caller identity from the raw Authorization header value
    pub fn authorize(&self, authorization_header: Option<&str>) -> DomainResult<AuthenticatedUser> {
        let header = authorization_header.ok_or(AuthError::AuthenticationRequired)?;
        let token = extract_bearer_token(header).ok_or(AuthError::MalformedAuthorizationHeader)?;

        let claims = self.token_service.verify_token(token).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            e
        })?;
        let user_id = claims.user_id().map_err(|_| TokenError::InvalidClaims)?;

        Ok(AuthenticatedUser {
            user_id,
            expires_at: claims.expires_at(),
            token_id: claims.jti,
        })
    }
}
