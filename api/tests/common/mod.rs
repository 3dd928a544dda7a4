// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use async_trait::async_trait;
use catalog::{
  CatalogError, CatalogResult, FixedClock, InMemoryProductRepository, NewProduct, Product, ProductRepository,
};
use catalog_api::web::configure_app_routes;
use catalog_api::{AppConfig, AppState, StorageBackend};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

pub const BASE_URL: &str = "http://catalog.test";

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn fixed_now() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    app_base_url: BASE_URL.to_string(),
    storage_backend: StorageBackend::Memory,
    database_url: None,
    database_max_connections: 1,
  }
}

/// In-memory gateway that counts every call it receives.
#[derive(Default)]
pub struct CountingRepository {
  inner: InMemoryProductRepository,
  calls: AtomicUsize,
}

impl CountingRepository {
  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn stored(&self) -> usize {
    self.inner.len()
  }

  fn tick(&self) {
    self.calls.fetch_add(1, Ordering::SeqCst);
  }
}

#[async_trait]
impl ProductRepository for CountingRepository {
  async fn exists_by_code(&self, code: &str) -> CatalogResult<bool> {
    self.tick();
    self.inner.exists_by_code(code).await
  }

  async fn add(&self, product: NewProduct) -> CatalogResult<Product> {
    self.tick();
    self.inner.add(product).await
  }

  async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
    self.tick();
    self.inner.get_by_id(id).await
  }

  async fn list(&self, category_id: Option<i32>) -> CatalogResult<Vec<Product>> {
    self.tick();
    self.inner.list(category_id).await
  }

  async fn update(&self, product: &Product) -> CatalogResult<Option<Product>> {
    self.tick();
    self.inner.update(product).await
  }

  async fn delete(&self, id: i32) -> CatalogResult<bool> {
    self.tick();
    self.inner.delete(id).await
  }
}

/// Gateway whose storage is always down.
pub struct UnavailableRepository;

impl UnavailableRepository {
  fn fault() -> CatalogError {
    anyhow::anyhow!("connection to 10.1.2.3:5432 refused").into()
  }
}

#[async_trait]
impl ProductRepository for UnavailableRepository {
  async fn exists_by_code(&self, _code: &str) -> CatalogResult<bool> {
    Err(Self::fault())
  }

  async fn add(&self, _product: NewProduct) -> CatalogResult<Product> {
    Err(Self::fault())
  }

  async fn get_by_id(&self, _id: i32) -> CatalogResult<Option<Product>> {
    Err(Self::fault())
  }

  async fn list(&self, _category_id: Option<i32>) -> CatalogResult<Vec<Product>> {
    Err(Self::fault())
  }

  async fn update(&self, _product: &Product) -> CatalogResult<Option<Product>> {
    Err(Self::fault())
  }

  async fn delete(&self, _id: i32) -> CatalogResult<bool> {
    Err(Self::fault())
  }
}

pub fn state_with(repository: Arc<dyn ProductRepository>) -> AppState {
  setup_tracing();
  AppState::new(repository, Arc::new(FixedClock(fixed_now())), Arc::new(test_config()))
}

pub fn counting_state() -> (AppState, Arc<CountingRepository>) {
  let repository = Arc::new(CountingRepository::default());
  (state_with(repository.clone()), repository)
}

pub fn app(
  state: AppState,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(web::Data::new(state))
    .configure(configure_app_routes)
}
