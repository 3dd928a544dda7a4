// catalog_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use catalog::CatalogError;

/// Body of every 500 response; the actual cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Ocurrió un error interno";

#[derive(Debug, Error)]
pub enum AppError {
  /// Rejected by the HTTP surface before any handler ran (bad id, mismatched body, malformed JSON).
  #[error("{0}")]
  Validation(String),

  #[error("{source}")]
  Catalog {
    #[from]
    source: CatalogError,
  },

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  fn client_message(&self) -> Option<&str> {
    match self {
      AppError::Validation(m) => Some(m.as_str()),
      AppError::Catalog {
        source: CatalogError::Validation(m),
      } => Some(m.as_str()),
      _ => None,
    }
  }
}

// Fault barrier: validation-category errors become 400 with their message,
// anything else becomes 500 with a generic body.
impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    if self.client_message().is_some() {
      StatusCode::BAD_REQUEST
    } else {
      StatusCode::INTERNAL_SERVER_ERROR
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self.client_message() {
      Some(message) => {
        tracing::warn!(application_error = %self, "Responding with validation error");
        HttpResponse::BadRequest().json(json!({ "error": message }))
      }
      None => {
        tracing::error!(application_error = ?self, "Responding with internal error");
        HttpResponse::InternalServerError().json(json!({ "error": INTERNAL_ERROR_MESSAGE }))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
