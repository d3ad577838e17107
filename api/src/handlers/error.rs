//! Mapping from domain failures to HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use ec_core::errors::{AuthError, DomainError, ErrorKind};
use ec_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;
use validator::ValidationErrors;

/// Domain error carried to the HTTP boundary
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        Self(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

/// HTTP status for each error class
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Auth => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Storage | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the JSON error response for a domain error
///
/// Storage and internal failures are logged with their details; the client
/// only sees a generic message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error.kind());
    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }
    HttpResponse::build(status).json(error.to_error_response())
}

/// First message out of `validator` field errors, as a domain validation error
pub fn validation_failure(errors: &ValidationErrors) -> ApiError {
    let message = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                failure
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid request".to_string());

    ApiError(DomainError::Validation { message })
}

/// Malformed or oversized JSON bodies answer 400 in the shared error shape
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let status = match &error {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    tracing::debug!(error = %error, "Rejected request body");

    let body = ErrorResponse::new(error_codes::BAD_REQUEST, error.to_string());
    let response = HttpResponse::build(status).json(body);
    InternalError::from_response(error, response).into()
}

/// Default handler for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
