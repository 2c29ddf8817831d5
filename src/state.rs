//! Application state management.

use crate::config::Config;
use crate::db::{DatabasePool, MemoryStore, PgStore, RestaurantStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage client used by every handler.
    pub store: Arc<dyn RestaurantStore>,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new application state backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Creates a new application state over the given store.
    #[must_use]
    pub fn with_store(store: Arc<dyn RestaurantStore>) -> Self {
        Self {
            store,
            config: Config::default(),
        }
    }

    /// Creates a new application state from configuration.
    ///
    /// Connects to PostgreSQL when a database URL is configured, otherwise
    /// keeps data in memory.
    ///
    /// # Errors
    /// Returns an error if the database cannot be reached or migrated.
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn RestaurantStore> = match config.database.url.as_deref() {
            Some(url) => {
                let db = DatabasePool::new(url, &config.database).await?;
                if config.database.run_migrations {
                    db.run_migrations().await?;
                }
                Arc::new(PgStore::new(db))
            }
            None => {
                warn!("No database URL configured, data will be kept in memory");
                Arc::new(MemoryStore::new())
            }
        };

        info!("Application state initialized");

        Ok(Self { store, config })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
