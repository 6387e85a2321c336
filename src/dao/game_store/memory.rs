//! DashMap-backed store mirroring the relational contract without a database.
//!
//! Used when `DATABASE_URL` is not configured, and by the integration tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;

use crate::dao::{
    game_store::GameStore,
    models::{GameDraft, GameEntity},
    storage::StorageResult,
};

/// Process-local game store keyed by id.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<DashMap<i64, GameEntity>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryGameStore {
    /// Create an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            games: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn snapshot(&self) -> Vec<GameEntity> {
        let mut games: Vec<GameEntity> = self
            .games
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        games.sort_by_key(|game| game.id);
        games
    }
}

impl GameStore for MemoryGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let games = self.snapshot();
        Box::pin(async move { Ok(games) })
    }

    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let game = self.games.get(&id).map(|entry| entry.value().clone());
        Box::pin(async move { Ok(game) })
    }

    fn create_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let game = draft.into_entity(id);
        self.games.insert(id, game.clone());
        Box::pin(async move { Ok(game) })
    }

    fn update_game(
        &self,
        id: i64,
        draft: GameDraft,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let updated = self.games.get_mut(&id).map(|mut entry| {
            let game = draft.into_entity(id);
            *entry.value_mut() = game.clone();
            game
        });
        Box::pin(async move { Ok(updated) })
    }

    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let removed = self.games.remove(&id).is_some();
        Box::pin(async move { Ok(removed) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
