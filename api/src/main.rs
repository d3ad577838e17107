use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use ec_api::telemetry::init_tracing;
use ec_api::{create_app, AppState};
use ec_core::BcryptPasswordHasher;
use ec_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;
    config.validate().context("invalid configuration")?;

    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }

    info!(environment = %config.environment, "Starting storefront API server");

    let store = ec_infra::initialize(&config.database)
        .await
        .context("failed to connect to MongoDB")?;

    let hasher = BcryptPasswordHasher::new(config.auth.password_hash_cost);
    let state = web::Data::new(AppState::new(Arc::new(store), hasher, &config.auth));

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, workers = config.server.workers, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}
