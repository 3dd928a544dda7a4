// catalog/src/handlers/get_product.rs

use crate::error::CatalogResult;
use crate::handlers::RequestHandler;
use crate::model::Product;
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProductByIdQuery {
  pub id: i32,
}

pub struct GetProductByIdHandler {
  repository: Arc<dyn ProductRepository>,
}

impl GetProductByIdHandler {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl RequestHandler<GetProductByIdQuery> for GetProductByIdHandler {
  type Output = Option<Product>;

  #[instrument(name = "handler::get_product", skip(self), fields(product_id = query.id))]
  async fn handle(&self, query: GetProductByIdQuery) -> CatalogResult<Option<Product>> {
    let found = self.repository.get_by_id(query.id).await?;
    if found.is_none() {
      debug!("No product with this id.");
    }
    Ok(found)
  }
}
