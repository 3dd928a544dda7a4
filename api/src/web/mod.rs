// catalog_api/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export key items so main.rs and the integration tests can mount the API.
pub use routes::configure_app_routes;
