use serde::Serialize;
use utoipa::ToSchema;

/// Body of the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"` while a storage backend is reachable, `"degraded"` otherwise.
    pub status: String,
}

impl HealthResponse {
    /// Build the response from the shared degraded flag.
    pub fn from_degraded(degraded: bool) -> Self {
        let status = if degraded { "degraded" } else { "ok" };
        Self {
            status: status.to_string(),
        }
    }
}
