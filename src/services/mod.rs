/// Login verification and bearer-token handling.
pub mod auth_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// CRUD orchestration over the games table.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Storage connection supervision with reconnect/backoff.
pub mod storage_supervisor;
/// Uploaded file persistence with uniqueness-preserving renames.
pub mod upload_service;
