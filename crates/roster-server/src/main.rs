//! # Roster Server
//!
//! Main entry point for the Roster application. Wires the in-memory user
//! store through the DAO and repository layers and serves the REST API.

use roster_core::{PasswordHasher, RosterError, RosterResult};
use roster_repository::{MemoryUserStore, UserDao, UserRepository};
use roster_rest::{create_router, AppState};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod config;

use config::AppConfig;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Roster Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RosterResult<()> {
    let config = AppConfig::load()?;

    // Compose the layers explicitly; every handle is passed down by hand.
    let store = Arc::new(MemoryUserStore::new());
    let hasher = PasswordHasher::with_cost(config.security.password_hash_cost);
    let dao = UserDao::new(store, hasher);
    let repository = Arc::new(UserRepository::new(dao));

    let app_state = AppState::new(repository);
    let router = create_router(app_state);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RosterError::internal(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RosterError::internal(format!("Server error: {e}")))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roster=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received terminate signal, shutting down"),
    }
}
