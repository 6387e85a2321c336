//! Library crate for mesa-dados-back, exposing the REST backend modules and
//! the consuming-side catalog client for the binary and integration tests.

/// Consuming-side catalog: session cache, filter pipeline, admin mediator.
pub mod catalog;
/// Environment-driven runtime configuration.
pub mod config;
/// Storage backends and persisted models.
pub mod dao;
/// REST request/response payloads.
pub mod dto;
/// Service and HTTP error taxonomy.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Service layer.
pub mod services;
/// Shared application state.
pub mod state;
