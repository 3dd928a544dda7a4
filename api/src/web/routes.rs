// catalog_api/src/web/routes.rs

use actix_web::{error::InternalError, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

pub const API_SCOPE: &str = "/api/v1";
pub const PRODUCTS_SCOPE: &str = "/products";

/// Absolute URL of a product resource, used for `Location` headers.
pub fn product_location(base_url: &str, id: i32) -> String {
  format!("{}{}{}/{}", base_url, API_SCOPE, PRODUCTS_SCOPE, id)
}

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Extractor failures (malformed JSON, non-numeric ids, bad query strings) are client errors
// and go through the same barrier as handler validation errors.
fn extractor_error(err: impl std::fmt::Display, _req: &HttpRequest) -> actix_web::Error {
  let app_error = AppError::Validation(err.to_string());
  let response = actix_web::ResponseError::error_response(&app_error);
  InternalError::from_response(app_error, response).into()
}

// This function is called in `main.rs` (and by the integration tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, req| extractor_error(err, req)))
    .app_data(web::PathConfig::default().error_handler(|err, req| extractor_error(err, req)))
    .app_data(web::QueryConfig::default().error_handler(|err, req| extractor_error(err, req)))
    .service(
      web::scope(API_SCOPE)
        .route("/health", web::get().to(health_check_handler))
        .service(
          web::scope(PRODUCTS_SCOPE)
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler))
            .route("/{id}", web::get().to(product_handlers::get_product_handler))
            .route("/{id}", web::put().to(product_handlers::update_product_handler))
            .route("/{id}", web::patch().to(product_handlers::patch_product_handler))
            .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
        ),
    );
}
