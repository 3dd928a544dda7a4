// catalog/src/handlers/patch_product.rs

use crate::error::CatalogResult;
use crate::handlers::{rules, RequestHandler};
use crate::model::Product;
use crate::persistence::ProductRepository;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Partial update: every field left as `None` keeps its stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchProductCommand {
  pub id: i32,
  pub code: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub category_id: Option<i32>,
  pub stock_quantity: Option<i32>,
  pub active: Option<bool>,
}

impl PatchProductCommand {
  fn apply_to(self, product: &mut Product) {
    if let Some(code) = self.code {
      product.code = code;
    }
    if let Some(name) = self.name {
      product.name = name;
    }
    if let Some(description) = self.description {
      product.description = description;
    }
    if let Some(price) = self.price {
      product.price = price;
    }
    if let Some(category_id) = self.category_id {
      product.category_id = category_id;
    }
    if let Some(stock_quantity) = self.stock_quantity {
      product.stock_quantity = stock_quantity;
    }
    if let Some(active) = self.active {
      product.active = active;
    }
  }
}

pub struct PatchProductHandler {
  repository: Arc<dyn ProductRepository>,
}

impl PatchProductHandler {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl RequestHandler<PatchProductCommand> for PatchProductHandler {
  type Output = Option<Product>;

  #[instrument(name = "handler::patch_product", skip(self, command), fields(product_id = command.id), err(Display))]
  async fn handle(&self, command: PatchProductCommand) -> CatalogResult<Option<Product>> {
    let Some(mut product) = self.repository.get_by_id(command.id).await? else {
      warn!("Patch requested for a product that does not exist.");
      return Ok(None);
    };

    if let Some(price) = command.price {
      rules::ensure_valid_price(price)?;
    }
    if let Some(code) = command.code.as_deref() {
      if code != product.code {
        rules::ensure_code_available(self.repository.as_ref(), code).await?;
      }
    }

    command.apply_to(&mut product);

    let patched = self.repository.update(&product).await?;
    if patched.is_some() {
      info!("Product patched.");
    }
    Ok(patched)
  }
}
