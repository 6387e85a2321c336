use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials submitted to the login endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin account name.
    pub username: String,
    /// Admin password in clear; verified against the configured hash.
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed token to present as `Authorization: Bearer <token>`.
    pub token: String,
}

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated account name.
    pub sub: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}
