use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use product_api::{
    app::{build_router, product::repository::ProductRepository, PRODUCTS_PATH},
    app_state,
    config::{Config, StorageBackend},
    infrastructure::{
        database::DatabaseManager, logger::Logger, memory_repository::MemoryProductRepository,
        pg_repository::PgProductRepository,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    Logger::init(&config.logging.level);

    let repository: Arc<dyn ProductRepository> = match config.storage.backend {
        StorageBackend::Postgres => {
            let database = DatabaseManager::new(&config.database)
                .await
                .context("failed to connect to database")?;
            database
                .migrate()
                .await
                .context("failed to prepare database schema")?;
            info!("Database connected");
            Arc::new(PgProductRepository::new(database.get_pool().clone()))
        }
        StorageBackend::Memory => {
            info!("Using in-memory product store");
            Arc::new(MemoryProductRepository::new())
        }
    };

    let app = build_router(app_state(repository));

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;

    info!(
        "Running on http://{}{}",
        listener.local_addr()?,
        PRODUCTS_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
