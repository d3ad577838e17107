//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use ec_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse classification every caller can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Auth,
    NotFound,
    Storage,
    Internal,
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::Conflict { .. } | DomainError::Auth(AuthError::UserAlreadyExists) => {
                ErrorKind::Conflict
            }
            DomainError::Token(TokenError::TokenGenerationFailed) => ErrorKind::Internal,
            DomainError::Auth(_) | DomainError::Token(_) => ErrorKind::Auth,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Storage { .. } => ErrorKind::Storage,
            DomainError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code for the outward error body
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                error_codes::VALIDATION_ERROR
            }
            DomainError::Conflict { .. } | DomainError::Auth(AuthError::UserAlreadyExists) => {
                error_codes::CONFLICT
            }
            DomainError::Auth(AuthError::InvalidCredentials) => error_codes::INVALID_CREDENTIALS,
            DomainError::Auth(_) => error_codes::UNAUTHORIZED,
            DomainError::Token(TokenError::TokenGenerationFailed) => error_codes::INTERNAL_ERROR,
            DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
            DomainError::Token(_) => error_codes::TOKEN_INVALID,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Storage { .. } => error_codes::STORAGE_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Message safe to show to API clients
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Validation { message } | DomainError::Conflict { message } => {
                message.clone()
            }
            DomainError::ValidationErr(err) => err.to_string(),
            DomainError::Auth(err) => err.to_string(),
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                "Failed to generate token".to_string()
            }
            DomainError::Token(_) => "Invalid or expired token".to_string(),
            DomainError::NotFound { .. } => self.to_string(),
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.error_code(), self.public_message());
        match self {
            DomainError::ValidationErr(ValidationError::InvalidProductReference { reference })
            | DomainError::ValidationErr(ValidationError::UnknownProduct { reference }) => {
                response.add_detail("product_id", reference)
            }
            DomainError::ValidationErr(err) => match err.field() {
                Some(field) => response.add_detail("field", field),
                None => response,
            },
            _ => response,
        }
    }
}
