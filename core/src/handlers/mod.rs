// catalog/src/handlers/mod.rs

//! Command/query handlers, one per catalog use case.
//!
//! Each handler implements [`RequestHandler`] for exactly one request type and is
//! called directly by its consumer; there is no runtime dispatch table.
//! "Not found" is part of each handler's `Output` (`Option` or `bool`), never an error.

use crate::clock::Clock;
use crate::error::CatalogResult;
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use std::sync::Arc;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod patch_product;
pub mod update_product;

pub use create_product::{CreateProductCommand, CreateProductHandler};
pub use delete_product::{DeleteProductCommand, DeleteProductHandler};
pub use get_product::{GetProductByIdHandler, GetProductByIdQuery};
pub use list_products::{GetProductsHandler, GetProductsQuery};
pub use patch_product::{PatchProductCommand, PatchProductHandler};
pub use update_product::{UpdateProductCommand, UpdateProductHandler};

#[async_trait]
pub trait RequestHandler<Request>: Send + Sync
where
  Request: Send + 'static,
{
  type Output: Send;

  async fn handle(&self, request: Request) -> CatalogResult<Self::Output>;
}

/// The full set of product use cases, wired to one gateway and one clock.
#[derive(Clone)]
pub struct ProductCatalog {
  pub create: Arc<CreateProductHandler>,
  pub get_by_id: Arc<GetProductByIdHandler>,
  pub list: Arc<GetProductsHandler>,
  pub update: Arc<UpdateProductHandler>,
  pub patch: Arc<PatchProductHandler>,
  pub delete: Arc<DeleteProductHandler>,
}

impl ProductCatalog {
  pub fn new(repository: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>) -> Self {
    Self {
      create: Arc::new(CreateProductHandler::new(repository.clone(), clock)),
      get_by_id: Arc::new(GetProductByIdHandler::new(repository.clone())),
      list: Arc::new(GetProductsHandler::new(repository.clone())),
      update: Arc::new(UpdateProductHandler::new(repository.clone())),
      patch: Arc::new(PatchProductHandler::new(repository.clone())),
      delete: Arc::new(DeleteProductHandler::new(repository)),
    }
  }
}

// Shared business rules for handlers that write a price or a code.
pub(crate) mod rules {
  use crate::error::{messages, CatalogError, CatalogResult};
  use crate::persistence::ProductRepository;
  use rust_decimal::Decimal;

  /// Stored prices are `NUMERIC(18, 2)`: reject anything that column would round.
  pub const PRICE_MAX_SCALE: u32 = 2;

  pub fn ensure_valid_price(price: Decimal) -> CatalogResult<()> {
    if price <= Decimal::ZERO {
      tracing::warn!(%price, "Rejected non-positive price.");
      return Err(CatalogError::validation(messages::PRICE_NOT_POSITIVE));
    }
    if price.normalize().scale() > PRICE_MAX_SCALE {
      tracing::warn!(%price, "Rejected price with more than two decimals.");
      return Err(CatalogError::validation(messages::PRICE_TOO_PRECISE));
    }
    Ok(())
  }

  pub async fn ensure_code_available(repository: &dyn ProductRepository, code: &str) -> CatalogResult<()> {
    if repository.exists_by_code(code).await? {
      tracing::warn!(code, "Rejected duplicate product code.");
      return Err(CatalogError::validation(messages::DUPLICATE_CODE));
    }
    Ok(())
  }
}
