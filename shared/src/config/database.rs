//! Database configuration module

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::env_or;

/// Document database connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URI
    pub url: String,

    /// Database name selected after connecting
    pub name: String,

    /// Connection and initial ping timeout in seconds
    pub connect_timeout: u64,

    /// Deadline for every individual store operation in seconds
    pub operation_timeout: u64,

    /// Create collection indexes on startup
    #[serde(default = "default_ensure_indexes")]
    pub ensure_indexes: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mongodb://localhost:27017"),
            name: String::from("ecommerce"),
            connect_timeout: 10,
            operation_timeout: 5,
            ensure_indexes: default_ensure_indexes(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env_or("MONGODB_URI", defaults.url),
            name: env_or("DB_NAME", defaults.name),
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout),
            operation_timeout: env_or("DATABASE_OPERATION_TIMEOUT", defaults.operation_timeout),
            ensure_indexes: env_or("DATABASE_ENSURE_INDEXES", defaults.ensure_indexes),
        }
    }

    /// Create a new database configuration with URI and database name
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout)
    }

    /// Check if this points at a non-local server
    pub fn is_remote(&self) -> bool {
        !self.url.contains("localhost") && !self.url.contains("127.0.0.1")
    }
}

fn default_ensure_indexes() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.name, "ecommerce");
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.operation_timeout(), Duration::from_secs(5));
        assert!(!config.is_remote());
    }

    #[test]
    fn test_database_config_new() {
        let config = DatabaseConfig::new("mongodb://db.internal:27017", "shop");
        assert_eq!(config.name, "shop");
        assert!(config.is_remote());
        assert!(config.ensure_indexes);
    }
}
