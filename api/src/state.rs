// catalog_api/src/state.rs
use crate::config::{AppConfig, StorageBackend};
use crate::errors::{AppError, Result};
use crate::persistence::PgProductRepository;

use catalog::{Clock, InMemoryProductRepository, ProductCatalog, ProductRepository, SystemClock};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: ProductCatalog,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(repository: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>, config: Arc<AppConfig>) -> Self {
    Self {
      catalog: ProductCatalog::new(repository, clock),
      config,
    }
  }

  /// Connects the configured storage backend and wires the catalog to the system clock.
  pub async fn from_config(config: Arc<AppConfig>) -> Result<Self> {
    let repository: Arc<dyn ProductRepository> = match config.storage_backend {
      StorageBackend::Memory => {
        tracing::warn!("Using the in-memory storage backend; data will not survive a restart.");
        Arc::new(InMemoryProductRepository::new())
      }
      StorageBackend::Postgres => {
        let database_url = config
          .database_url
          .as_deref()
          .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;
        let pool = PgPoolOptions::new()
          .max_connections(config.database_max_connections)
          .connect(database_url)
          .await?;
        tracing::info!("Successfully connected to the database.");
        let repository = PgProductRepository::new(pool);
        repository.ensure_schema().await?;
        Arc::new(repository)
      }
    };

    Ok(Self::new(repository, Arc::new(SystemClock), config))
  }
}
