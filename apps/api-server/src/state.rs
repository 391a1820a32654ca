//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostStore;
use blog_infra::store::{InMemoryPostStore, JsonFilePostStore};

use crate::config::{AppConfig, StorageConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub environment: String,
}

impl AppState {
    /// Build the application state with the configured post store.
    pub async fn new(config: &AppConfig) -> Self {
        let posts: Arc<dyn PostStore> = match &config.storage {
            StorageConfig::File { path } => match JsonFilePostStore::open(path.clone()).await {
                Ok(store) => {
                    tracing::info!(path = %path.display(), "Using JSON file post store");
                    Arc::new(store)
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to open posts file {}: {}. Using in-memory fallback.",
                        path.display(),
                        e
                    );
                    Arc::new(InMemoryPostStore::with_samples())
                }
            },
            StorageConfig::Memory => {
                tracing::info!("Using in-memory post store");
                Arc::new(InMemoryPostStore::with_samples())
            }
            StorageConfig::Database(db_config) => Self::database_store(db_config).await,
        };

        tracing::info!(backend = posts.backend(), "Application state initialized");

        Self::with_store(posts, config.environment.clone())
    }

    /// State around an already-built store.
    pub fn with_store(posts: Arc<dyn PostStore>, environment: impl Into<String>) -> Self {
        Self {
            posts,
            environment: environment.into(),
        }
    }

    #[cfg(feature = "database")]
    async fn database_store(config: &blog_infra::DatabaseConfig) -> Arc<dyn PostStore> {
        use blog_infra::SeaOrmPostStore;
        use migration::{Migrator, MigratorTrait};

        let db = match blog_infra::database::connect(config).await {
            Ok(db) => db,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Arc::new(InMemoryPostStore::with_samples());
            }
        };

        if let Err(e) = Migrator::up(&db, None).await {
            tracing::error!("Failed to apply migrations: {}. Using in-memory fallback.", e);
            return Arc::new(InMemoryPostStore::with_samples());
        }

        let store = SeaOrmPostStore::new(db);
        if let Err(e) = store.seed_if_empty().await {
            tracing::warn!("Failed to seed sample posts: {}", e);
        }

        Arc::new(store)
    }

    #[cfg(not(feature = "database"))]
    async fn database_store(_config: &blog_infra::DatabaseConfig) -> Arc<dyn PostStore> {
        tracing::warn!("Built without the database feature - using in-memory post store");
        Arc::new(InMemoryPostStore::with_samples())
    }
}
