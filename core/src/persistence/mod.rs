// catalog/src/persistence/mod.rs

//! The persistence gateway: the only component that reads or writes stored products.
//! Every method is a single storage call; faults surface as `CatalogError::Storage`.

pub mod memory;

use crate::error::CatalogResult;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;

pub use memory::InMemoryProductRepository;

#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// True iff a stored product carries exactly this code.
  async fn exists_by_code(&self, code: &str) -> CatalogResult<bool>;

  /// Inserts and commits a new product, returning it with its assigned id.
  async fn add(&self, product: NewProduct) -> CatalogResult<Product>;

  async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>>;

  /// All products ordered by id, restricted to `category_id` when given.
  async fn list(&self, category_id: Option<i32>) -> CatalogResult<Vec<Product>>;

  /// Replaces every mutable column of the row identified by `product.id`.
  /// `id` and `created_at` are never written. Returns `None` if the row is gone.
  async fn update(&self, product: &Product) -> CatalogResult<Option<Product>>;

  /// Returns whether a row was removed.
  async fn delete(&self, id: i32) -> CatalogResult<bool>;
}
