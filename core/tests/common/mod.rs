// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use catalog::{
  CreateProductCommand, FixedClock, InMemoryProductRepository, Product, ProductCatalog, RequestHandler,
};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
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

/// A catalog over a fresh in-memory table and a frozen clock.
/// The repository is returned too so tests can inspect storage directly.
pub fn catalog() -> (ProductCatalog, Arc<InMemoryProductRepository>) {
  setup_tracing();
  let repository = Arc::new(InMemoryProductRepository::new());
  let catalog = ProductCatalog::new(repository.clone(), Arc::new(FixedClock(fixed_now())));
  (catalog, repository)
}

pub fn create_command(code: &str, category_id: i32) -> CreateProductCommand {
  CreateProductCommand {
    code: code.to_string(),
    name: format!("Widget {}", code),
    description: format!("Description of {}", code),
    price: Decimal::new(999, 2),
    category_id,
    stock_quantity: 5,
  }
}

pub async fn seed(catalog: &ProductCatalog, code: &str, category_id: i32) -> Product {
  catalog
    .create
    .handle(create_command(code, category_id))
    .await
    .expect("seeding a valid product must succeed")
}
