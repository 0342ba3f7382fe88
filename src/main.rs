//! tunebook - GraphQL API server for a small music catalog
//!
//! Books and authors live in memory and reset on restart; songs persist
//! in SQLite. Everything is served from a single /graphql endpoint on a
//! fixed port.

use anyhow::Result;
use tokio::signal;
use tracing::{error, info};
use tunebook::{build_router, AppState, Config, Library};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting tunebook v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::default();
    info!("Database path: {}", config.database_path.display());

    let pool = match tunebook::db::init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    let library = Library::seeded();
    info!(
        "✓ Loaded {} authors and {} books",
        library.authors().len(),
        library.books().len()
    );

    let state = AppState::new(pool, library);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("tunebook listening on http://{}", addr);
    info!("GraphiQL explorer: http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
