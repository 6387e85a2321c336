use futures::future::BoxFuture;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::dao::{
    game_store::GameStore,
    models::{GameDraft, GameEntity},
    storage::{StorageError, StorageResult},
};

use super::error::{PgDaoError, PgResult};

/// Columns of the `games` table, in insertion order.
const GAME_COLUMNS: &str = "id, name, description, image, players, min_age, duration, categories, \
     difficulty, rating, review, external_link, pros, cons, featured, rules_summary, rules_file";

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS games (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        image TEXT,
        players TEXT NOT NULL DEFAULT '',
        min_age INTEGER NOT NULL DEFAULT 0,
        duration TEXT NOT NULL DEFAULT '',
        categories TEXT[] NOT NULL DEFAULT '{}',
        difficulty TEXT NOT NULL DEFAULT '',
        rating DOUBLE PRECISION,
        review TEXT NOT NULL DEFAULT '',
        external_link TEXT,
        pros TEXT[] NOT NULL DEFAULT '{}',
        cons TEXT[] NOT NULL DEFAULT '{}',
        featured BOOLEAN NOT NULL DEFAULT FALSE,
        rules_summary TEXT,
        rules_file TEXT
    )";

/// Game store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgGameStore {
    pool: PgPool,
}

impl PgGameStore {
    /// Connect to PostgreSQL and make sure the games table exists.
    pub async fn connect(database_url: &str) -> PgResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|source| PgDaoError::Connect { source })?;

        sqlx::query(CREATE_TABLE_SQL)
            .execute(&pool)
            .await
            .map_err(|source| PgDaoError::Schema { source })?;

        Ok(Self { pool })
    }

    async fn list(&self) -> PgResult<Vec<GameEntity>> {
        let sql = format!("SELECT {GAME_COLUMNS} FROM games ORDER BY id");
        sqlx::query_as::<_, GameEntity>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| PgDaoError::query("list", source))
    }

    async fn find(&self, id: i64) -> PgResult<Option<GameEntity>> {
        let sql = format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, GameEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| PgDaoError::query("find", source))
    }

    async fn insert(&self, draft: GameDraft) -> PgResult<GameEntity> {
        let sql = format!(
            "INSERT INTO games \
             (name, description, image, players, min_age, duration, categories, difficulty, \
              rating, review, external_link, pros, cons, featured, rules_summary, rules_file) \
             VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,$15,$16) \
             RETURNING {GAME_COLUMNS}"
        );
        bind_draft(sqlx::query_as::<_, GameEntity>(&sql), &draft)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| PgDaoError::query("insert", source))
    }

    async fn update(&self, id: i64, draft: GameDraft) -> PgResult<Option<GameEntity>> {
        let sql = format!(
            "UPDATE games SET \
             name = $1, description = $2, image = $3, players = $4, min_age = $5, \
             duration = $6, categories = $7, difficulty = $8, rating = $9, review = $10, \
             external_link = $11, pros = $12, cons = $13, featured = $14, \
             rules_summary = $15, rules_file = $16 \
             WHERE id = $17 RETURNING {GAME_COLUMNS}"
        );
        bind_draft(sqlx::query_as::<_, GameEntity>(&sql), &draft)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| PgDaoError::query("update", source))
    }

    async fn delete(&self, id: i64) -> PgResult<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| PgDaoError::query("delete", source))?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> PgResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|source| PgDaoError::query("ping", source))
    }
}

type GameQuery<'q> =
    sqlx::query::QueryAs<'q, sqlx::Postgres, GameEntity, sqlx::postgres::PgArguments>;

fn bind_draft<'q>(query: GameQuery<'q>, draft: &'q GameDraft) -> GameQuery<'q> {
    query
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(&draft.players)
        .bind(draft.min_age)
        .bind(&draft.duration)
        .bind(&draft.categories)
        .bind(&draft.difficulty)
        .bind(draft.rating)
        .bind(&draft.review)
        .bind(&draft.external_link)
        .bind(&draft.pros)
        .bind(&draft.cons)
        .bind(draft.featured)
        .bind(&draft.rules_summary)
        .bind(&draft.rules_file)
}

fn storage_error(operation: &'static str, err: PgDaoError) -> StorageError {
    StorageError::unavailable(format!("postgres {operation} failed"), err)
}

impl GameStore for PgGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list().await.map_err(|e| storage_error("list", e)) })
    }

    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find(id).await.map_err(|e| storage_error("find", e)) })
    }

    fn create_game(&self, draft: GameDraft) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .insert(draft)
                .await
                .map_err(|e| storage_error("insert", e))
        })
    }

    fn update_game(
        &self,
        id: i64,
        draft: GameDraft,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .update(id, draft)
                .await
                .map_err(|e| storage_error("update", e))
        })
    }

    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete(id)
                .await
                .map_err(|e| storage_error("delete", e))
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(|e| storage_error("ping", e)) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        // The pool re-establishes connections lazily; a successful ping is
        // enough to consider the backend reachable again.
        self.health_check()
    }
}
