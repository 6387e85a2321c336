//! Mesa & Dados backend binary entrypoint wiring REST, uploads and storage.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mesa_dados_back::{
    config::AppConfig,
    dao::{game_store::memory::MemoryGameStore, game_store::GameStore, storage::StorageError},
    routes,
    services::storage_supervisor,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    let port = config.port;
    let public_dir = config.public_dir.clone();
    let database_url = config.database_url.clone();

    let app_state = AppState::new(config);
    tokio::spawn(storage_supervisor::run(
        app_state.clone(),
        move || connect_store(database_url.clone()),
    ));

    let app = build_router(app_state, &public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Open the configured storage backend.
///
/// Without a `DATABASE_URL` the process-local in-memory store is used, the
/// counterpart of running the catalog against seed data.
async fn connect_store(database_url: Option<String>) -> Result<Arc<dyn GameStore>, StorageError> {
    match database_url {
        #[cfg(feature = "postgres-store")]
        Some(url) => {
            let store = mesa_dados_back::dao::game_store::postgres::PgGameStore::connect(&url)
                .await
                .map_err(|err| {
                    StorageError::unavailable("postgres connection failed".into(), err)
                })?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "postgres-store"))]
        Some(_) => {
            tracing::warn!("DATABASE_URL set but postgres-store is disabled; using memory store");
            Ok(Arc::new(MemoryGameStore::new()))
        }
        None => {
            info!("DATABASE_URL not set; using in-memory store");
            Ok(Arc::new(MemoryGameStore::new()))
        }
    }
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState, public_dir: &std::path::Path) -> Router<()> {
    routes::router(state)
        .nest_service("/images", ServeDir::new(public_dir.join("images")))
        .nest_service("/rules", ServeDir::new(public_dir.join("rules")))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
