// catalog_api/src/persistence/postgres.rs

use async_trait::async_trait;
use catalog::{messages, CatalogError, CatalogResult, NewProduct, Product, ProductRepository};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::{error, info, instrument};

const PRODUCT_COLUMNS: &str = "id, code, name, description, price, category_id, stock_quantity, active, created_at";

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
  id             INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
  code           TEXT NOT NULL UNIQUE,
  name           TEXT NOT NULL,
  description    TEXT NOT NULL DEFAULT '',
  price          NUMERIC(18, 2) NOT NULL CHECK (price > 0),
  category_id    INTEGER NOT NULL,
  stock_quantity INTEGER NOT NULL,
  active         BOOLEAN NOT NULL DEFAULT TRUE,
  created_at     TIMESTAMPTZ NOT NULL
)
"#;

const CREATE_CATEGORY_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_products_category_id ON products (category_id)";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i32,
  code: String,
  name: String,
  description: String,
  price: Decimal,
  category_id: i32,
  stock_quantity: i32,
  active: bool,
  created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      code: row.code,
      name: row.name,
      description: row.description,
      price: row.price,
      category_id: row.category_id,
      stock_quantity: row.stock_quantity,
      active: row.active,
      created_at: row.created_at,
    }
  }
}

/// Converts a driver error into the catalog's error space.
/// A violated UNIQUE(code) means a concurrent insert won the race past `exists_by_code`.
fn storage_error(operation: &'static str, e: sqlx::Error) -> CatalogError {
  let unique_violation = e
    .as_database_error()
    .map(|db_err| db_err.is_unique_violation())
    .unwrap_or(false);
  if unique_violation {
    return CatalogError::validation(messages::DUPLICATE_CODE);
  }
  error!("Database error during {}: {}", operation, e);
  CatalogError::Storage {
    source: anyhow::Error::new(e).context(operation),
  }
}

/// Gateway over the `products` table, one runtime query per call.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Creates the `products` table and its category index if they are missing.
  pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
    sqlx::query(CREATE_CATEGORY_INDEX).execute(&self.pool).await?;
    info!("Products schema is in place.");
    Ok(())
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  #[instrument(name = "pg_repo::exists_by_code", skip(self))]
  async fn exists_by_code(&self, code: &str) -> CatalogResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM products WHERE code = $1)")
      .bind(code)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| storage_error("exists_by_code", e))
  }

  #[instrument(name = "pg_repo::add", skip(self, product), fields(code = %product.code))]
  async fn add(&self, product: NewProduct) -> CatalogResult<Product> {
    let sql = format!(
      "INSERT INTO products (code, name, description, price, category_id, stock_quantity, active, created_at) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
      PRODUCT_COLUMNS
    );
    let row: ProductRow = sqlx::query_as(&sql)
      .bind(&product.code)
      .bind(&product.name)
      .bind(&product.description)
      .bind(product.price)
      .bind(product.category_id)
      .bind(product.stock_quantity)
      .bind(product.active)
      .bind(product.created_at)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| storage_error("add", e))?;
    Ok(row.into())
  }

  #[instrument(name = "pg_repo::get_by_id", skip(self))]
  async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
    let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
    let row: Option<ProductRow> = sqlx::query_as(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| storage_error("get_by_id", e))?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "pg_repo::list", skip(self))]
  async fn list(&self, category_id: Option<i32>) -> CatalogResult<Vec<Product>> {
    // A NULL filter matches every row.
    let sql = format!(
      "SELECT {} FROM products WHERE ($1::INTEGER IS NULL OR category_id = $1) ORDER BY id ASC",
      PRODUCT_COLUMNS
    );
    let rows: Vec<ProductRow> = sqlx::query_as(&sql)
      .bind(category_id)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| storage_error("list", e))?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "pg_repo::update", skip(self, product), fields(id = product.id))]
  async fn update(&self, product: &Product) -> CatalogResult<Option<Product>> {
    let sql = format!(
      "UPDATE products SET code = $2, name = $3, description = $4, price = $5, category_id = $6, \
       stock_quantity = $7, active = $8 WHERE id = $1 RETURNING {}",
      PRODUCT_COLUMNS
    );
    let row: Option<ProductRow> = sqlx::query_as(&sql)
      .bind(product.id)
      .bind(&product.code)
      .bind(&product.name)
      .bind(&product.description)
      .bind(product.price)
      .bind(product.category_id)
      .bind(product.stock_quantity)
      .bind(product.active)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| storage_error("update", e))?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "pg_repo::delete", skip(self))]
  async fn delete(&self, id: i32) -> CatalogResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| storage_error("delete", e))?;
    Ok(result.rows_affected() > 0)
  }
}
