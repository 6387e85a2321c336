/// In-memory backend used when no database is configured and by tests.
pub mod memory;
#[cfg(feature = "postgres-store")]
/// PostgreSQL backend over sqlx.
pub mod postgres;

use crate::dao::models::{GameDraft, GameEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for the games table.
pub trait GameStore: Send + Sync {
    /// All games ordered by ascending id.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// A single game by id, if it exists.
    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Insert a new game and return it with its assigned id.
    fn create_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Replace every field of an existing game; `None` when the id is unknown.
    fn update_game(
        &self,
        id: i64,
        draft: GameDraft,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Hard-delete a game; returns whether a row was removed.
    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>>;
    /// Cheap connectivity probe.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Attempt to re-establish a dropped connection.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
