//! Database Module
//!
//! Opens the document store at startup. A missing or unreachable database
//! is not fatal: the server runs in degraded mode with an unavailable
//! gateway.

pub mod repository;
pub mod store;
pub mod surreal;

pub use store::{Document, DocumentStore, Filter, Gateway, StoreError, StoreResult};
pub use surreal::{Credentials, SurrealStore};

use std::sync::Arc;
use std::time::Duration;

use crate::core::Config;

/// Database service - establishes the single store handle
pub struct DbService;

impl DbService {
    /// Connect using the database settings in `config`
    ///
    /// Returns an unavailable gateway when the settings are incomplete, the
    /// connection fails or the connect timeout elapses.
    pub async fn connect(config: &Config) -> Gateway {
        let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
            return Gateway::unavailable();
        };

        let credentials = config.database_credentials();
        let timeout = Duration::from_millis(config.database_connect_timeout_ms);
        let connect = SurrealStore::connect(
            url,
            &config.database_namespace,
            name,
            credentials.as_ref(),
        );

        match tokio::time::timeout(timeout, connect).await {
            Ok(Ok(store)) => {
                tracing::info!(
                    namespace = %config.database_namespace,
                    database = %name,
                    "Database connection established"
                );
                Gateway::new(Arc::new(store))
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Database connection failed, running without a database");
                Gateway::unavailable()
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = config.database_connect_timeout_ms,
                    "Database connection timed out, running without a database"
                );
                Gateway::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_settings_give_unavailable_gateway() {
        let config = Config {
            database_url: None,
            database_name: Some("alessio".into()),
            ..Config::default()
        };
        assert!(!DbService::connect(&config).await.is_connected());
    }

    #[tokio::test]
    async fn test_bad_url_gives_unavailable_gateway() {
        let config = Config {
            database_url: Some("nosuchscheme://localhost".into()),
            database_name: Some("alessio".into()),
            ..Config::default()
        };
        assert!(!DbService::connect(&config).await.is_connected());
    }

    #[tokio::test]
    async fn test_in_memory_database_connects() {
        let config = Config {
            database_url: Some("mem://".into()),
            database_name: Some("alessio".into()),
            ..Config::default()
        };
        assert!(DbService::connect(&config).await.is_connected());
    }
}
