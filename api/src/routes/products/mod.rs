//! Catalog route handlers
//!
//! Reads are public; writes sit behind the JWT middleware.

use actix_web::{web, HttpResponse};

use ec_core::repositories::DocumentStore;
use ec_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::{MessageResponse, ProductRequest, ProductResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/products
pub async fn list_products<S, H>(state: web::Data<AppState<S, H>>) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let products = state.catalog_service.list_products().await?;
    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Handler for GET /api/products/{id}
pub async fn get_product<S, H>(
    state: web::Data<AppState<S, H>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let product = state.catalog_service.get_product(&path).await?;
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// Handler for POST /api/products
pub async fn create_product<S, H>(
    auth: AuthContext,
    state: web::Data<AppState<S, H>>,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let product = state.catalog_service.create_product(request.into_inner().into()).await?;
    tracing::info!(user_id = %auth.user_id, product_id = %product.id, "Product created");
    Ok(HttpResponse::Created().json(ProductResponse::from(product)))
}

/// Handler for PUT /api/products/{id}
pub async fn update_product<S, H>(
    auth: AuthContext,
    state: web::Data<AppState<S, H>>,
    path: web::Path<String>,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let product = state
        .catalog_service
        .update_product(&path, request.into_inner().into())
        .await?;
    tracing::info!(user_id = %auth.user_id, product_id = %product.id, "Product updated");
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// Handler for DELETE /api/products/{id}
pub async fn delete_product<S, H>(
    auth: AuthContext,
    state: web::Data<AppState<S, H>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    state.catalog_service.delete_product(&path).await?;
    tracing::info!(user_id = %auth.user_id, product_id = %path.as_str(), "Product deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Product deleted successfully")))
}
