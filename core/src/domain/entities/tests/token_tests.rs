//! Unit tests for token claims

use chrono::{Duration, Utc};

use crate::domain::entities::token::{Claims, JWT_ISSUER, TOKEN_EXPIRY_HOURS};
use crate::domain::value_objects::RecordId;

#[test]
fn test_access_token_claims() {
    let user_id = RecordId::new();
    let claims = Claims::new_access_token(user_id, JWT_ISSUER, Duration::hours(TOKEN_EXPIRY_HOURS));

    assert_eq!(claims.sub, user_id.to_hex());
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, "storefront");
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
    assert_eq!(claims.nbf, claims.iat);
    assert!(!claims.is_expired());
    assert!(!claims.jti.is_empty());
}

#[test]
fn test_expired_claims() {
    let mut claims = Claims::new_access_token(RecordId::new(), JWT_ISSUER, Duration::hours(1));
    claims.exp = (Utc::now() - Duration::minutes(1)).timestamp();
    assert!(claims.is_expired());
}

#[test]
fn test_unique_token_ids() {
    let user_id = RecordId::new();
    let a = Claims::new_access_token(user_id, JWT_ISSUER, Duration::hours(1));
    let b = Claims::new_access_token(user_id, JWT_ISSUER, Duration::hours(1));
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_malformed_subject() {
    let mut claims = Claims::new_access_token(RecordId::new(), JWT_ISSUER, Duration::hours(1));
    claims.sub = "550e8400-e29b-41d4-a716-446655440000".to_string();
    assert!(claims.user_id().is_err());
}
