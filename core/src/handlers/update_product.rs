// catalog/src/handlers/update_product.rs

use crate::error::CatalogResult;
use crate::handlers::{rules, RequestHandler};
use crate::model::Product;
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Full replacement of a product's mutable fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductCommand {
  pub id: i32,
  pub code: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub price: Decimal,
  pub category_id: i32,
  pub stock_quantity: i32,
  pub active: bool,
}

pub struct UpdateProductHandler {
  repository: Arc<dyn ProductRepository>,
}

impl UpdateProductHandler {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl RequestHandler<UpdateProductCommand> for UpdateProductHandler {
  type Output = Option<Product>;

  #[instrument(name = "handler::update_product", skip(self, command), fields(product_id = command.id), err(Display))]
  async fn handle(&self, command: UpdateProductCommand) -> CatalogResult<Option<Product>> {
    let Some(mut product) = self.repository.get_by_id(command.id).await? else {
      warn!("Update requested for a product that does not exist.");
      return Ok(None);
    };

    rules::ensure_valid_price(command.price)?;
    if command.code != product.code {
      rules::ensure_code_available(self.repository.as_ref(), &command.code).await?;
    }

    product.code = command.code;
    product.name = command.name;
    product.description = command.description;
    product.price = command.price;
    product.category_id = command.category_id;
    product.stock_quantity = command.stock_quantity;
    product.active = command.active;

    let updated = self.repository.update(&product).await?;
    if updated.is_some() {
      info!("Product updated.");
    }
    Ok(updated)
  }
}
