use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::{
    dto::{
        game::{GamePayload, GameResponse},
        upload::UploadResponse,
    },
    error::AppError,
    services::{
        auth_service::AdminClaims,
        game_service,
        upload_service::{self, IMAGE_SUBDIR, RULES_SUBDIR},
    },
    state::SharedState,
};

/// Catalog endpoints: public reads plus token-guarded mutations and uploads.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route("/games/upload-image", post(upload_image))
        .route("/games/upload-rules", post(upload_rules))
}

#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses((status = 200, description = "All games ordered by id", body = [GameResponse]))
)]
/// Return every game in the catalog.
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game", body = GameResponse),
        (status = 404, description = "Unknown game")
    )
)]
/// Return a single game by id.
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(game_service::get_game(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = GamePayload,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 401, description = "Missing bearer token"),
        (status = 403, description = "Invalid bearer token")
    )
)]
/// Create a game (admin only).
pub async fn create_game(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Json(payload): Json<GamePayload>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    payload.validate()?;
    let game = game_service::create_game(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    request_body = GamePayload,
    responses(
        (status = 200, description = "Game updated", body = GameResponse),
        (status = 404, description = "Unknown game")
    )
)]
/// Fully replace a game (admin only).
pub async fn update_game(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
    Json(payload): Json<GamePayload>,
) -> Result<Json<GameResponse>, AppError> {
    payload.validate()?;
    Ok(Json(game_service::update_game(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses((status = 204, description = "Game deleted"))
)]
/// Hard-delete a game (admin only).
pub async fn delete_game(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    game_service::delete_game(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/games/upload-image",
    tag = "games",
    responses(
        (status = 200, description = "Stored image path", body = UploadResponse),
        (status = 400, description = "No file in the `image` field")
    )
)]
/// Store a cover image and return its public path (admin only).
pub async fn upload_image(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    store_multipart_file(&state, multipart, "image", IMAGE_SUBDIR).await
}

#[utoipa::path(
    post,
    path = "/api/games/upload-rules",
    tag = "games",
    responses(
        (status = 200, description = "Stored rules path", body = UploadResponse),
        (status = 400, description = "No file in the `rulesFile` field")
    )
)]
/// Store a rules PDF and return its public path (admin only).
pub async fn upload_rules(
    State(state): State<SharedState>,
    _admin: AdminClaims,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    store_multipart_file(&state, multipart, "rulesFile", RULES_SUBDIR).await
}

/// Pull the named field out of the multipart body and persist it.
async fn store_multipart_file(
    state: &SharedState,
    mut multipart: Multipart,
    field_name: &str,
    subdir: &str,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("malformed multipart body: {err}")))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let original_name = field.file_name().unwrap_or(field_name).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(format!("failed to read upload: {err}")))?;

        let path = upload_service::store_upload(
            &state.config().public_dir,
            subdir,
            &original_name,
            &bytes,
        )
        .await?;
        return Ok(Json(UploadResponse { path }));
    }

    Err(AppError::BadRequest(format!(
        "no file was uploaded in field `{field_name}`"
    )))
}
