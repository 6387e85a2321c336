//! Shared application state handed to every route handler.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use crate::{config::AppConfig, dao::game_store::GameStore, error::ServiceError};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state storing the configuration and the database
/// handle installed by the storage supervisor.
pub struct AppState {
    config: AppConfig,
    game_store: RwLock<Option<Arc<dyn GameStore>>>,
    degraded: watch::Sender<bool>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new(config: AppConfig) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            config,
            game_store: RwLock::new(None),
            degraded: degraded_tx,
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Obtain a handle to the current game store, if one is installed.
    pub async fn game_store(&self) -> Option<Arc<dyn GameStore>> {
        let guard = self.game_store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the game store or fail with a degraded-mode error.
    pub async fn require_game_store(&self) -> Result<Arc<dyn GameStore>, ServiceError> {
        self.game_store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a storage backend and leave degraded mode.
    pub async fn set_game_store(&self, store: Arc<dyn GameStore>) {
        {
            let mut guard = self.game_store.write().await;
            *guard = Some(store);
        }
        self.update_degraded(false).await;
    }

    /// Current degraded flag.
    pub async fn is_degraded(&self) -> bool {
        *self.degraded.borrow()
    }

    /// Update and broadcast the degraded flag when the value changes.
    pub async fn update_degraded(&self, value: bool) {
        if *self.degraded.borrow() == value {
            return;
        }
        let _ = self.degraded.send(value);
    }

    /// Subscribe to degraded mode updates.
    pub fn degraded_watcher(&self) -> watch::Receiver<bool> {
        self.degraded.subscribe()
    }
}
