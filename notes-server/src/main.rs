mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;
mod store;

use std::sync::Arc;

use config::StoreKind;
use handlers::rest;
use repository::Repository;
use service::NoteService;
use store::{MemoryStore, NoteStore};

async fn connect_store(cfg: &config::Config) -> Arc<dyn NoteStore> {
    match cfg.store {
        StoreKind::Memory => {
            tracing::warn!("Using the in-memory store, notes will be lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreKind::Postgres => {
            let Some(database_dsn) = cfg.pg_dsn.as_deref() else {
                tracing::error!("No database dsn configured for the postgres store");
                panic!("database dsn must be provided for the postgres store");
            };

            // Repository creation and migration
            let mut repo = Repository::new(database_dsn).await.unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

            repo.migrate().await.unwrap_or_else(|e| {
                tracing::error!("Failed to migrate database: {e}");
                panic!("failed to migrate database: {e}");
            });

            Arc::new(repo)
        }
    }
}

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to load config: {e}");
    });
    tracing::info!("Successfully loaded notes server config");

    // Service creation
    let store = connect_store(&cfg).await;
    let service = Arc::new(NoteService::new(store));

    let router = rest::router(service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.port);
            panic!("failed to bind to port {}: {e}", cfg.port);
        });

    match listener.local_addr() {
        Ok(addr) => tracing::info!("REST server starting, listening on {}", addr),
        Err(e) => tracing::warn!("REST server starting, local address unavailable: {e}"),
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
