use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use yuno::auth::{AuthService, UserDb};
use yuno::{bootstrap_store, router, AppState, EmbeddingGenerator, ItemStore, YunoConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info").add_directive("yuno=info".parse().unwrap()));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = YunoConfig::from_env();
    info!(
        "Starting YUNO recommendation service (metric={}, embedding={}/{})",
        config.distance_metric, config.embedding_provider, config.embedding_model
    );

    let embedder = Arc::new(EmbeddingGenerator::from_config(&config));
    let store = Arc::new(ItemStore::new(config.distance_metric));

    let auth = Arc::new(AuthService::new(UserDb::open(&config.user_db_path)?));
    let seeded = auth.seed_if_empty(config.catalog_seed)?;
    if seeded > 0 {
        info!("User store seeded with {} synthetic accounts", seeded);
    }

    // Populate-if-empty runs to completion before the listener opens, so
    // queries never race the bootstrap.
    bootstrap_store(store.as_ref(), embedder.as_ref(), &config).await?;

    let state = AppState::new(embedder, store, auth);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
