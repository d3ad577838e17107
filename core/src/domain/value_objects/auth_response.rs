//! Values handed back by the identity and authorization flows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record_id::RecordId;

/// Signed bearer credential returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessToken {
    /// Encoded JWT
    pub token: String,

    /// Always "Bearer"
    pub token_type: String,

    /// Seconds until expiry at the time of issue
    pub expires_in: i64,

    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn bearer(token: String, expires_at: DateTime<Utc>) -> Self {
        let expires_in = (expires_at - Utc::now()).num_seconds().max(0);
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            expires_at,
        }
    }
}

/// Identity established by a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: RecordId,

    /// `jti` of the token that authenticated the request
    pub token_id: String,

    pub expires_at: DateTime<Utc>,
}
