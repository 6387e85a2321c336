//! Keeps the storage backend connected, flipping degraded mode when it drops.

use std::{future::Future, sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dao::{game_store::GameStore, storage::StorageError},
    state::SharedState,
};

const INITIAL_DELAY: Duration = Duration::from_millis(1_000);
const MAX_DELAY: Duration = Duration::from_secs(10);
const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_RECONNECT_ATTEMPTS: u32 = 3;

/// Connect (and reconnect) to the storage backend, keeping the shared state
/// in degraded mode whenever it is unavailable.
pub async fn run<F, Fut>(state: SharedState, mut connect: F)
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Arc<dyn GameStore>, StorageError>> + Send,
{
    let mut delay = INITIAL_DELAY;

    loop {
        match connect().await {
            Ok(store) => {
                state.set_game_store(store.clone()).await;
                info!("storage connection established; leaving degraded mode");
                delay = INITIAL_DELAY;

                watch_health(&state, store.as_ref()).await;
                // Health watching only returns once reconnect attempts are
                // exhausted; fall through to a fresh connection.
            }
            Err(err) => {
                warn!(error = %err, "storage connection attempt failed");
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
        }
    }
}

/// Poll the backend until it becomes unreachable and cannot be revived.
async fn watch_health(state: &SharedState, store: &dyn GameStore) {
    loop {
        match store.health_check().await {
            Ok(()) => {
                if state.is_degraded().await {
                    info!("storage healthy again; leaving degraded mode");
                    state.update_degraded(false).await;
                }
                sleep(HEALTH_POLL_INTERVAL).await;
            }
            Err(err) => {
                warn!(error = %err, "storage health check failed; entering degraded mode");
                state.update_degraded(true).await;

                if !attempt_reconnect(store).await {
                    warn!("exhausted storage reconnect attempts; reconnecting from scratch");
                    return;
                }

                state.update_degraded(false).await;
                sleep(HEALTH_POLL_INTERVAL).await;
            }
        }
    }
}

async fn attempt_reconnect(store: &dyn GameStore) -> bool {
    let mut delay = INITIAL_DELAY;
    for attempt in 1..=MAX_RECONNECT_ATTEMPTS {
        match store.try_reconnect().await {
            Ok(()) => {
                info!(attempt, "storage reconnection succeeded");
                return true;
            }
            Err(err) => {
                warn!(attempt, error = %err, "storage reconnect attempt failed");
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
        }
    }
    false
}
