//! Request/response payloads exposed by the REST API.

/// Login request/response payloads.
pub mod auth;
/// Game payloads and responses.
pub mod game;
/// Healthcheck response.
pub mod health;
/// Upload response payload.
pub mod upload;
/// Validation helpers for DTOs.
pub mod validation;
