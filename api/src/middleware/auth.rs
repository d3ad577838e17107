//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware hands the raw `Authorization` header to the core
//! `AuthorizationGuard` and, on success, stores the resolved identity in the
//! request extensions. Handlers read it back through the `AuthContext`
//! extractor and pass the user id explicitly to the services.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use chrono::{DateTime, Utc};
use ec_core::{AuthError, AuthenticatedUser, AuthorizationGuard, RecordId};
use futures_util::future::LocalBoxFuture;

use crate::handlers::ApiError;

/// Caller identity injected into protected requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Identity id taken from the token subject
    pub user_id: RecordId,
    /// Token id (`jti`) for log correlation
    pub token_id: String,
    pub expires_at: DateTime<Utc>,
}

impl From<AuthenticatedUser> for AuthContext {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id,
            token_id: user.token_id,
            expires_at: user.expires_at,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    guard: Arc<AuthorizationGuard>,
}

impl JwtAuth {
    pub fn new(guard: Arc<AuthorizationGuard>) -> Self {
        Self { guard }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            guard: self.guard.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    guard: Arc<AuthorizationGuard>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authorized = {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());
            self.guard.authorize(header)
        };

        Box::pin(async move {
            match authorized {
                Ok(user) => {
                    req.extensions_mut().insert(AuthContext::from(user));
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    tracing::debug!(path = %req.path(), error = %e, "Unauthorized request");
                    let response = ApiError(e).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthError::AuthenticationRequired));

        ready(result)
    }
}
