// src/lib.rs

//! Catalog: the product-catalog domain, independent of any web framework or database driver.
//!
//! The crate provides:
//!  - The `Product` entity and its not-yet-persisted form.
//!  - The `ProductRepository` persistence gateway, plus an in-memory implementation.
//!  - One command/query handler per use case (create, get, list, update, patch, delete),
//!    each behind the `RequestHandler` interface and bundled in `ProductCatalog`.
//!  - An injectable `Clock` so creation timestamps are deterministic under test.

pub mod clock;
pub mod error;
pub mod handlers;
pub mod model;
pub mod persistence;

// --- Re-exports for the Public API ---

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::{messages, CatalogError, CatalogResult};
pub use crate::handlers::{
  CreateProductCommand, DeleteProductCommand, GetProductByIdQuery, GetProductsQuery, PatchProductCommand,
  ProductCatalog, RequestHandler, UpdateProductCommand,
};
pub use crate::model::{NewProduct, Product};
pub use crate::persistence::{InMemoryProductRepository, ProductRepository};
