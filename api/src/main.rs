// catalog_api/src/main.rs

use catalog_api::web::configure_app_routes;
use catalog_api::{AppConfig, AppState};

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;

fn startup_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
  tracing::error!(error = %e, "{}", context);
  std::io::Error::other(format!("{}: {}", context, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // INFO unless RUST_LOG says otherwise
  catalog_api::telemetry::init_tracing();

  tracing::info!("Starting product catalog server...");

  let app_config = AppConfig::from_env()
    .map(Arc::new)
    .map_err(|e| startup_error("Failed to load application configuration", e))?;

  let app_state = AppState::from_config(app_config.clone())
    .await
    .map_err(|e| startup_error("Failed to initialize storage", e))?;

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
