//! CRUD operations over the games table.

use crate::{
    dao::models::GameDraft,
    dto::game::{GamePayload, GameResponse},
    error::ServiceError,
    state::SharedState,
};

/// All games ordered by id.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let store = state.require_game_store().await?;
    let games = store.list_games().await?;
    Ok(games.into_iter().map(Into::into).collect())
}

/// A single game by id.
pub async fn get_game(state: &SharedState, id: i64) -> Result<GameResponse, ServiceError> {
    let store = state.require_game_store().await?;
    let Some(game) = store.find_game(id).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };
    Ok(game.into())
}

/// Insert a new game after checking the payload invariants.
pub async fn create_game(
    state: &SharedState,
    payload: GamePayload,
) -> Result<GameResponse, ServiceError> {
    let draft = build_draft(payload)?;
    let store = state.require_game_store().await?;
    let game = store.create_game(draft).await?;
    Ok(game.into())
}

/// Fully replace an existing game.
pub async fn update_game(
    state: &SharedState,
    id: i64,
    payload: GamePayload,
) -> Result<GameResponse, ServiceError> {
    let draft = build_draft(payload)?;
    let store = state.require_game_store().await?;
    let Some(game) = store.update_game(id, draft).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };
    Ok(game.into())
}

/// Hard-delete a game. Deleting an id that is already gone is not an error.
pub async fn delete_game(state: &SharedState, id: i64) -> Result<(), ServiceError> {
    let store = state.require_game_store().await?;
    store.delete_game(id).await?;
    Ok(())
}

fn build_draft(payload: GamePayload) -> Result<GameDraft, ServiceError> {
    if payload.name.trim().is_empty() {
        return Err(ServiceError::InvalidInput(
            "game name must not be empty".into(),
        ));
    }

    let mut draft = GameDraft::from(payload);
    // Empty strings in optional columns are stored as NULL, matching the
    // original schema defaults.
    draft.image = draft.image.filter(|v| !v.is_empty());
    draft.external_link = draft.external_link.filter(|v| !v.is_empty());
    draft.rules_summary = draft.rules_summary.filter(|v| !v.is_empty());
    draft.rules_file = draft.rules_file.filter(|v| !v.is_empty());
    Ok(draft)
}
