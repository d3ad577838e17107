use ec_core::{AccessToken, LoginCredentials, RegisterUser};
use serde::{Deserialize, Serialize};

/// Registration body; absent fields reach the service as empty strings so
/// it can report which one is missing
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            name: request.name,
            address: request.address,
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<AccessToken> for LoginResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}
