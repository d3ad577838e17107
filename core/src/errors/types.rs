//! Error type definitions for identity, token and input validation failures

use thiserror::Error;

/// Authentication-related errors
///
/// `InvalidCredentials` is deliberately the only login failure so that
/// callers cannot tell an unknown email from a wrong password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Invalid authorization header")]
    MalformedAuthorizationHeader,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("{field} must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid {field}")]
    InvalidId { field: String, value: String },

    #[error("Invalid product ID: {reference}")]
    InvalidProductReference { reference: String },

    #[error("Product not found: {reference}")]
    UnknownProduct { reference: String },

    #[error("{field} {constraint}")]
    OutOfRange { field: String, constraint: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_id(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidId {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::RequiredField { field }
            | Self::TooShort { field, .. }
            | Self::InvalidId { field, .. }
            | Self::OutOfRange { field, .. } => Some(field),
            Self::InvalidEmail => Some("email"),
            Self::InvalidProductReference { .. } | Self::UnknownProduct { .. } => {
                Some("product_id")
            }
        }
    }
}
