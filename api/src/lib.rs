// catalog_api/src/lib.rs

//! HTTP surface and storage wiring for the product catalog.

pub mod config;
pub mod errors;
pub mod persistence;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::{AppConfig, StorageBackend};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
