use axum::{extract::State, routing::get, Json, Router};

use crate::{dto::health::HealthResponse, services::health_service, state::SharedState};

/// Healthcheck route subtree, mounted outside the `/api` prefix.
pub fn router() -> Router<SharedState> {
    Router::new().route("/healthcheck", get(healthcheck))
}

#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "health",
    responses((status = 200, description = "Backend health", body = HealthResponse))
)]
/// Report whether the backend can currently reach its storage.
pub async fn healthcheck(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(health_service::health_status(&state).await)
}
