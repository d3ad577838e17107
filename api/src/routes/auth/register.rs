use actix_web::{web, HttpResponse};

use ec_core::repositories::DocumentStore;
use ec_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::RegisterRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "email": "ada@example.com",
///     "password": "secret1",
///     "name": "Ada",
///     "address": "1 Analytical Way"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored profile (never the password hash).
/// `400` for the first failing field rule, `409` when the email is taken.
pub async fn register<S, H>(
    state: web::Data<AppState<S, H>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let profile = state.auth_service.register(request.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(profile))
}
