//! # Infrastructure Layer
//!
//! Concrete persistence for the storefront backend. The domain layer only
//! knows the `DocumentStore` contract; this crate provides the MongoDB
//! implementation of it.
//!
//! ## Architecture
//!
//! - **Connection**: client construction, startup ping and health checks
//! - **Store**: `DocumentStore` over MongoDB collections with per-operation deadlines
//! - **Indexes**: idempotent index bootstrap for users, products and orders
//! - **Convert**: JSON documents to BSON and back

pub mod database;

pub use database::{ensure_indexes, MongoConnection, MongoDocumentStore};

use ec_core::errors::DomainError;
use ec_shared::config::DatabaseConfig;

/// Connect to MongoDB and prepare the store used by every repository
///
/// This function:
/// - Opens the client and pings the server within the connect timeout
/// - Creates the collection indexes when `ensure_indexes` is set
/// - Returns a store bounded by the configured operation timeout
pub async fn initialize(
    config: &DatabaseConfig,
) -> Result<MongoDocumentStore, InfrastructureError> {
    tracing::info!(
        database = %config.name,
        remote = config.is_remote(),
        "Initializing infrastructure services..."
    );

    let connection = MongoConnection::connect(config).await?;
    if config.ensure_indexes {
        ensure_indexes(connection.database()).await?;
    }

    tracing::info!("Infrastructure services initialized successfully");

    Ok(MongoDocumentStore::new(
        connection.database().clone(),
        config.operation_timeout(),
    ))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Driver error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Operation did not finish before its deadline
    #[error("Database operation timed out: {operation}")]
    Timeout { operation: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfrastructureError {
    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// Whether the driver rejected a write because of a unique index
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            InfrastructureError::Database(err) => database::is_duplicate_key(err),
            _ => false,
        }
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        if err.is_duplicate_key() {
            return DomainError::Conflict {
                message: "duplicate key".to_string(),
            };
        }
        DomainError::storage(err.to_string())
    }
}
