// catalog/src/model/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored catalog product, as handed out by the persistence gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i32,
  pub code: String,
  pub name: String,
  pub description: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub category_id: i32,
  pub stock_quantity: i32,
  pub active: bool,
  pub created_at: DateTime<Utc>,
}

/// A product that has not been persisted yet; the gateway assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub code: String,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category_id: i32,
  pub stock_quantity: i32,
  pub active: bool,
  pub created_at: DateTime<Utc>,
}

impl NewProduct {
  /// Materializes the record once storage has assigned `id`.
  pub fn with_id(self, id: i32) -> Product {
    Product {
      id,
      code: self.code,
      name: self.name,
      description: self.description,
      price: self.price,
      category_id: self.category_id,
      stock_quantity: self.stock_quantity,
      active: self.active,
      created_at: self.created_at,
    }
  }
}
