// catalog_api/src/persistence/mod.rs

//! Storage backends for the catalog's persistence gateway.

pub mod postgres;

pub use postgres::PgProductRepository;
