//! MongoDB client connection management

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use ec_shared::config::DatabaseConfig;

use crate::InfrastructureError;

const APP_NAME: &str = "storefront";

/// Handle on the selected database; it keeps the underlying client alive
#[derive(Clone)]
pub struct MongoConnection {
    database: Database,
    connect_timeout: Duration,
}

impl MongoConnection {
    /// Parse the URI, open the client and ping the server within the connect timeout
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        if config.name.trim().is_empty() {
            return Err(InfrastructureError::Config("database name is empty".to_string()));
        }

        let connect_timeout = config.connect_timeout();
        let mut options = ClientOptions::parse(&config.url).await?;
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(connect_timeout);
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);
        let connection = Self {
            database,
            connect_timeout,
        };

        connection.ping().await?;
        tracing::info!(database = %config.name, "Connected to MongoDB");
        Ok(connection)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Ping the server; `Ok(false)` when it does not answer in time
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        match self.ping().await {
            Ok(()) => Ok(true),
            Err(InfrastructureError::Timeout { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn ping(&self) -> Result<(), InfrastructureError> {
        let reply = tokio::time::timeout(
            self.connect_timeout,
            self.database.run_command(doc! { "ping": 1 }, None),
        )
        .await
        .map_err(|_| InfrastructureError::timeout("ping"))??;

        let ok = reply
            .get("ok")
            .and_then(|value| value.as_f64().or_else(|| value.as_i32().map(f64::from)))
            .unwrap_or(0.0);
        if ok < 1.0 {
            return Err(InfrastructureError::Config(format!(
                "unexpected ping reply: {}",
                reply
            )));
        }
        Ok(())
    }
}
