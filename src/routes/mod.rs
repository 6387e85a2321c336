use axum::Router;

use crate::state::SharedState;

/// Admin login route.
pub mod auth;
/// Swagger UI.
pub mod docs;
/// Public catalog and admin CRUD routes.
pub mod games;
/// Healthcheck route.
pub mod health;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = Router::new()
        .merge(games::router())
        .merge(auth::router());

    let docs_router = docs::router(state.clone());

    Router::new()
        .nest("/api", api_router)
        .merge(health::router())
        .merge(docs_router)
        .with_state(state)
}
