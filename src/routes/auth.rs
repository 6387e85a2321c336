use axum::{extract::State, routing::post, Json, Router};

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::AppError,
    services::auth_service,
    state::SharedState,
};

/// Login route subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/auth/login", post(login))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed bearer token", body = LoginResponse),
        (status = 401, description = "Unknown user or wrong password")
    )
)]
/// Exchange admin credentials for a signed, time-limited bearer token.
pub async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    Ok(Json(auth_service::login(&state, payload).await?))
}
