// catalog/src/handlers/create_product.rs

use crate::clock::Clock;
use crate::error::CatalogResult;
use crate::handlers::{rules, RequestHandler};
use crate::model::{NewProduct, Product};
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductCommand {
  pub code: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price: Decimal,
  pub category_id: i32,
  pub stock_quantity: i32,
}

pub struct CreateProductHandler {
  repository: Arc<dyn ProductRepository>,
  clock: Arc<dyn Clock>,
}

impl CreateProductHandler {
  pub fn new(repository: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>) -> Self {
    Self { repository, clock }
  }
}

#[async_trait]
impl RequestHandler<CreateProductCommand> for CreateProductHandler {
  type Output = Product;

  #[instrument(name = "handler::create_product", skip(self, command), fields(code = %command.code), err(Display))]
  async fn handle(&self, command: CreateProductCommand) -> CatalogResult<Product> {
    rules::ensure_valid_price(command.price)?;
    rules::ensure_code_available(self.repository.as_ref(), &command.code).await?;

    let product = NewProduct {
      code: command.code,
      name: command.name,
      description: command.description,
      price: command.price,
      category_id: command.category_id,
      stock_quantity: command.stock_quantity,
      active: true,
      created_at: self.clock.now(),
    };

    let created = self.repository.add(product).await?;
    info!(id = created.id, "Product created.");
    Ok(created)
  }
}
