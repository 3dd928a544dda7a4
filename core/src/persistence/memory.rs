// catalog/src/persistence/memory.rs

use crate::error::{messages, CatalogError, CatalogResult};
use crate::model::{NewProduct, Product};
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{event, instrument, Level};

#[derive(Debug, Default)]
struct Table {
  rows: BTreeMap<i32, Product>,
  last_id: i32,
}

/// Process-local product table.
///
/// Guards are never held across `.await` points; every method does its work
/// under one lock acquisition, which makes each call atomic like a single
/// statement against a real database.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
  table: RwLock<Table>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.table.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  #[instrument(name = "memory_repo::exists_by_code", skip(self))]
  async fn exists_by_code(&self, code: &str) -> CatalogResult<bool> {
    Ok(self.table.read().rows.values().any(|p| p.code == code))
  }

  #[instrument(name = "memory_repo::add", skip(self, product), fields(code = %product.code))]
  async fn add(&self, product: NewProduct) -> CatalogResult<Product> {
    let mut table = self.table.write();
    // Mirrors the UNIQUE constraint on the SQL table.
    if table.rows.values().any(|p| p.code == product.code) {
      return Err(CatalogError::validation(messages::DUPLICATE_CODE));
    }
    let id = table
      .last_id
      .checked_add(1)
      .ok_or_else(|| CatalogError::Internal("Product id sequence exhausted".to_string()))?;
    table.last_id = id;
    let stored = product.with_id(id);
    table.rows.insert(stored.id, stored.clone());
    event!(Level::DEBUG, id = stored.id, "Product stored.");
    Ok(stored)
  }

  #[instrument(name = "memory_repo::get_by_id", skip(self))]
  async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
    Ok(self.table.read().rows.get(&id).cloned())
  }

  #[instrument(name = "memory_repo::list", skip(self))]
  async fn list(&self, category_id: Option<i32>) -> CatalogResult<Vec<Product>> {
    let table = self.table.read();
    Ok(
      table
        .rows
        .values()
        .filter(|p| category_id.map_or(true, |c| p.category_id == c))
        .cloned()
        .collect(),
    )
  }

  #[instrument(name = "memory_repo::update", skip(self, product), fields(id = product.id))]
  async fn update(&self, product: &Product) -> CatalogResult<Option<Product>> {
    let mut table = self.table.write();
    if table
      .rows
      .values()
      .any(|p| p.id != product.id && p.code == product.code)
    {
      return Err(CatalogError::validation(messages::DUPLICATE_CODE));
    }
    let Some(row) = table.rows.get_mut(&product.id) else {
      return Ok(None);
    };
    row.code = product.code.clone();
    row.name = product.name.clone();
    row.description = product.description.clone();
    row.price = product.price;
    row.category_id = product.category_id;
    row.stock_quantity = product.stock_quantity;
    row.active = product.active;
    Ok(Some(row.clone()))
  }

  #[instrument(name = "memory_repo::delete", skip(self))]
  async fn delete(&self, id: i32) -> CatalogResult<bool> {
    Ok(self.table.write().rows.remove(&id).is_some())
  }
}
