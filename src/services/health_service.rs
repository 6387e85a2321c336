//! Storage-aware health reporting.

use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Probe the store and report the backend health from the degraded flag.
///
/// A failing probe is only logged here; the supervisor owns flipping the
/// flag, so one slow poll cycle does not make the healthcheck flap.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.game_store().await {
        Some(store) => {
            if let Err(err) = store.health_check().await {
                warn!(error = %err, "store probe failed during healthcheck");
            }
        }
        None => warn!("healthcheck while no storage backend is installed"),
    }

    HealthResponse::from_degraded(state.is_degraded().await)
}
