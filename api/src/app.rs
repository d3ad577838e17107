//! Application state and factory
//!
//! This module wires repositories and services over a shared document
//! store and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ec_core::repositories::{
    DocumentOrderRepository, DocumentProductRepository, DocumentStore, DocumentUserRepository,
};
use ec_core::services::{
    AuthService, AuthServiceConfig, AuthorizationGuard, CatalogService, OrderService,
    PasswordHasher, TokenService, TokenServiceConfig,
};
use ec_shared::config::{AppConfig, AuthConfig};

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, orders, products};

/// Services shared by every worker
pub struct AppState<S, H>
where
    S: DocumentStore,
    H: PasswordHasher,
{
    pub auth_service: Arc<AuthService<DocumentUserRepository<S>, H>>,
    pub order_service: Arc<OrderService<DocumentOrderRepository<S>, DocumentProductRepository<S>>>,
    pub catalog_service: Arc<CatalogService<DocumentProductRepository<S>>>,
    pub guard: Arc<AuthorizationGuard>,
}

impl<S, H> AppState<S, H>
where
    S: DocumentStore,
    H: PasswordHasher,
{
    /// Build every repository and service over one store
    pub fn new(store: Arc<S>, password_hasher: H, config: &AuthConfig) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
        let products = Arc::new(DocumentProductRepository::new(store.clone()));

        let auth_service = AuthService::new(
            Arc::new(DocumentUserRepository::new(store.clone())),
            Arc::new(password_hasher),
            token_service.clone(),
            AuthServiceConfig::from(config),
        );
        let order_service = OrderService::new(
            Arc::new(DocumentOrderRepository::new(store)),
            products.clone(),
        );

        Self {
            auth_service: Arc::new(auth_service),
            order_service: Arc::new(order_service),
            catalog_service: Arc::new(CatalogService::new(products)),
            guard: Arc::new(AuthorizationGuard::new(token_service)),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<S, H>(
    app_state: web::Data<AppState<S, H>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: DocumentStore + 'static,
    H: PasswordHasher + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.guard.clone());
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Request spans first, then CORS
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<S, H>))
                        .route("/login", web::post().to(auth::login::<S, H>)),
                )
                .service(
                    web::scope("/products")
                        .route("", web::get().to(products::list_products::<S, H>))
                        .route(
                            "",
                            web::post()
                                .to(products::create_product::<S, H>)
                                .wrap(jwt_auth.clone()),
                        )
                        .route("/{id}", web::get().to(products::get_product::<S, H>))
                        .route(
                            "/{id}",
                            web::put()
                                .to(products::update_product::<S, H>)
                                .wrap(jwt_auth.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(products::delete_product::<S, H>)
                                .wrap(jwt_auth.clone()),
                        ),
                )
                .service(
                    web::scope("/orders")
                        .wrap(jwt_auth)
                        .route("", web::post().to(orders::create_order::<S, H>))
                        .route("", web::get().to(orders::get_user_orders::<S, H>))
                        .route("/{id}", web::get().to(orders::get_order::<S, H>))
                        .route("/{id}/status", web::put().to(orders::update_order_status::<S, H>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "storefront-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
