// catalog/src/handlers/delete_product.rs

use crate::error::CatalogResult;
use crate::handlers::RequestHandler;
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProductCommand {
  pub id: i32,
}

pub struct DeleteProductHandler {
  repository: Arc<dyn ProductRepository>,
}

impl DeleteProductHandler {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl RequestHandler<DeleteProductCommand> for DeleteProductHandler {
  /// `false` when there was nothing to delete.
  type Output = bool;

  #[instrument(name = "handler::delete_product", skip(self), fields(product_id = command.id))]
  async fn handle(&self, command: DeleteProductCommand) -> CatalogResult<bool> {
    let deleted = self.repository.delete(command.id).await?;
    if deleted {
      info!("Product deleted.");
    } else {
      warn!("Delete requested for a product that does not exist.");
    }
    Ok(deleted)
  }
}
