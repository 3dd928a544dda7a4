// catalog_api/src/web/handlers/product_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use catalog::{
  CreateProductCommand, DeleteProductCommand, GetProductByIdQuery, GetProductsQuery, PatchProductCommand,
  RequestHandler, UpdateProductCommand,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::routes::product_location;

pub const CATEGORY_NOT_POSITIVE: &str = "El categoryId debe ser mayor a cero.";
pub const ID_NOT_POSITIVE: &str = "El id debe ser mayor a cero.";
pub const ID_MISMATCH: &str = "El id de la ruta no coincide con el cuerpo.";
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado.";

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  #[serde(rename = "categoryId")]
  pub category_id: Option<i32>,
}

fn ensure_positive_id(id: i32) -> Result<(), AppError> {
  if id <= 0 {
    warn!(id, "Rejected non-positive product id.");
    return Err(AppError::Validation(ID_NOT_POSITIVE.to_string()));
  }
  Ok(())
}

fn ensure_route_matches_body(route_id: i32, body_id: i32) -> Result<(), AppError> {
  if route_id <= 0 || route_id != body_id {
    warn!(route_id, body_id, "Rejected route/body id mismatch.");
    return Err(AppError::Validation(ID_MISMATCH.to_string()));
  }
  Ok(())
}

fn not_found() -> HttpResponse {
  HttpResponse::NotFound().json(json!({ "error": PRODUCT_NOT_FOUND }))
}

#[instrument(name = "http::list_products", skip(app_state, query_params), fields(category_id = ?query_params.category_id))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let category_id = query_params.into_inner().category_id;
  if matches!(category_id, Some(c) if c <= 0) {
    warn!("Rejected non-positive category filter.");
    return Err(AppError::Validation(CATEGORY_NOT_POSITIVE.to_string()));
  }

  let products = app_state.catalog.list.handle(GetProductsQuery { category_id }).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "http::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  ensure_positive_id(id)?;

  match app_state.catalog.get_by_id.handle(GetProductByIdQuery { id }).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Ok(not_found()),
  }
}

#[instrument(name = "http::create_product", skip(app_state, payload), fields(code = %payload.code))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CreateProductCommand>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.create.handle(payload.into_inner()).await?;
  let location = product_location(&app_state.config.app_base_url, product.id);
  info!(product_id = product.id, %location, "Product created.");

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, location))
      .json(product),
  )
}

#[instrument(name = "http::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  payload: web::Json<UpdateProductCommand>,
) -> Result<HttpResponse, AppError> {
  let command = payload.into_inner();
  ensure_route_matches_body(path.into_inner(), command.id)?;

  match app_state.catalog.update.handle(command).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Ok(not_found()),
  }
}

#[instrument(name = "http::patch_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn patch_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  payload: web::Json<PatchProductCommand>,
) -> Result<HttpResponse, AppError> {
  let command = payload.into_inner();
  ensure_route_matches_body(path.into_inner(), command.id)?;

  match app_state.catalog.patch.handle(command).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Ok(not_found()),
  }
}

#[instrument(name = "http::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  ensure_positive_id(id)?;

  if app_state.catalog.delete.handle(DeleteProductCommand { id }).await? {
    Ok(HttpResponse::NoContent().finish())
  } else {
    Ok(not_found())
  }
}
