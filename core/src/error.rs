// catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  /// A business rule was violated by the request (non-positive price, duplicate code, ...).
  /// The message is meant for the API client.
  #[error("{0}")]
  Validation(String),

  #[error("Storage operation failed. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal catalog error: {0}")]
  Internal(String),
}

impl CatalogError {
  pub fn validation(message: impl Into<String>) -> Self {
    CatalogError::Validation(message.into())
  }

  pub fn is_validation(&self) -> bool {
    matches!(self, CatalogError::Validation(_))
  }
}

// Gateway implementations report their faults as anyhow errors.
impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    CatalogError::Storage { source: err }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;

/// Messages surfaced to API clients for business-rule violations.
pub mod messages {
  pub const PRICE_NOT_POSITIVE: &str = "El precio debe ser mayor a cero.";
  pub const PRICE_TOO_PRECISE: &str = "El precio no puede tener más de dos decimales.";
  pub const DUPLICATE_CODE: &str = "Ya existe un producto con ese código.";
}
