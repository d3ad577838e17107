//! Order route handlers; every route requires a bearer token

use actix_web::{web, HttpResponse};
use validator::Validate;

use ec_core::errors::DomainError;
use ec_core::repositories::DocumentStore;
use ec_core::services::order::parse_order_id;
use ec_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::{CreateOrderRequest, MessageResponse, OrderResponse, UpdateStatusRequest};
use crate::handlers::{validation_failure, ApiError};
use crate::middleware::AuthContext;

/// Handler for POST /api/orders
///
/// # Request Body
///
/// ```json
/// {
///     "items": [
///         { "product_id": "65a1f0c2b4d3e1a2b3c4d5e6", "quantity": 2, "price": 9.99 }
///     ]
/// }
/// ```
///
/// `201 Created` with the stored order. The first line whose product id is
/// malformed or unknown fails the whole request with `400` and nothing is
/// stored.
pub async fn create_order<S, H>(
    auth: AuthContext,
    state: web::Data<AppState<S, H>>,
    request: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let lines = request.into_inner().into_cart_lines();
    let order = state.order_service.create_order(auth.user_id, lines).await?;
    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// Handler for GET /api/orders
pub async fn get_user_orders<S, H>(
    auth: AuthContext,
    state: web::Data<AppState<S, H>>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let orders = state.order_service.get_user_orders(auth.user_id).await?;
    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Handler for GET /api/orders/{id}
///
/// Another user's order answers `404`, exactly like a missing one.
pub async fn get_order<S, H>(
    auth: AuthContext,
    state: web::Data<AppState<S, H>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let order = state.order_service.get_order(auth.user_id, &path).await?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// Handler for PUT /api/orders/{id}/status
///
/// Any authenticated caller may set any status on any order.
pub async fn update_order_status<S, H>(
    auth: AuthContext,
    state: web::Data<AppState<S, H>>,
    path: web::Path<String>,
    request: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    parse_order_id(&path).map_err(DomainError::from)?;
    request.validate().map_err(|e| validation_failure(&e))?;

    state.order_service.update_status(&path, &request.status).await?;
    tracing::info!(
        user_id = %auth.user_id,
        order_id = %path.as_str(),
        status = %request.status,
        "Order status updated"
    );
    Ok(HttpResponse::Ok().json(MessageResponse::new("Order status updated successfully")))
}
