use actix_web::{web, HttpResponse};

use ec_core::repositories::DocumentStore;
use ec_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/auth/login
///
/// Answers `{ "token", "token_type", "expires_in" }`. Unknown emails and
/// wrong passwords both answer `401 Invalid credentials`.
pub async fn login<S, H>(
    state: web::Data<AppState<S, H>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let token = state.auth_service.login(request.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(LoginResponse::from(token)))
}
