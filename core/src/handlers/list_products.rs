// catalog/src/handlers/list_products.rs

use crate::error::CatalogResult;
use crate::handlers::RequestHandler;
use crate::model::Product;
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetProductsQuery {
  pub category_id: Option<i32>,
}

pub struct GetProductsHandler {
  repository: Arc<dyn ProductRepository>,
}

impl GetProductsHandler {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl RequestHandler<GetProductsQuery> for GetProductsHandler {
  type Output = Vec<Product>;

  #[instrument(name = "handler::list_products", skip(self), fields(category_id = ?query.category_id))]
  async fn handle(&self, query: GetProductsQuery) -> CatalogResult<Vec<Product>> {
    let products = self.repository.list(query.category_id).await?;
    info!("Fetched {} products.", products.len());
    Ok(products)
  }
}
