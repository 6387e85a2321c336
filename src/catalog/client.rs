//! Session-scoped catalog client.
//!
//! Fetches the full game list from the store once per session and keeps it in
//! memory; filter, sort and pagination run locally over this cache. A failed
//! refetch never leaves a stale list behind.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::{keys::keys_to_camel, Game};

/// Errors surfaced by catalog fetches.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status.
    #[error("catalog request rejected with status {0}")]
    Status(reqwest::StatusCode),
    /// The requested game does not exist.
    #[error("game {0} not found")]
    NotFound(i64),
    /// The response body was not the expected shape.
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// In-memory cache of the full game list, fetched from the store's REST
/// surface and normalized to camelCase.
#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    games: Vec<Game>,
    error: Option<String>,
}

impl CatalogClient {
    /// Create a client for a store at `base_url` (scheme + host + port).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            games: Vec::new(),
            error: None,
        }
    }

    /// The store base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The cached game list; empty until the first successful fetch.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Human-readable description of the last failed fetch, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the complete game list and replace the cache with it.
    ///
    /// On any failure the cache is cleared and the error recorded, so
    /// consumers see an explicit empty-with-error state instead of stale
    /// records.
    pub async fn fetch_games(&mut self) -> Result<&[Game], CatalogError> {
        match self.request_games().await {
            Ok(games) => {
                debug!(count = games.len(), "fetched game list");
                self.games = games;
                self.error = None;
                Ok(&self.games)
            }
            Err(err) => {
                warn!(error = %err, "game list fetch failed");
                self.games.clear();
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn request_games(&self) -> Result<Vec<Game>, CatalogError> {
        let response = self
            .http
            .get(format!("{}/api/games", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let raw: Value = response.json().await?;
        let games = serde_json::from_value(keys_to_camel(raw))?;
        Ok(games)
    }

    /// Fetch a single game by id, bypassing the cache.
    pub async fn fetch_game(&self, id: i64) -> Result<Game, CatalogError> {
        let response = self
            .http
            .get(format!("{}/api/games/{id}", self.base_url))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let raw: Value = response.json().await?;
        let game = serde_json::from_value(keys_to_camel(raw))?;
        Ok(game)
    }
}
