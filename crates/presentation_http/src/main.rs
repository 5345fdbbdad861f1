//! Chirpy HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use anyhow::Context as _;
use application::UserService;
use infrastructure::{AppConfig, Database, PgUserStore};
use presentation_http::{HitCounter, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpy_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🐦 Chirpy v{} starting...", env!("CARGO_PKG_VERSION"));

    // A bad config is unrecoverable; so is an unreachable database or an
    // unbindable socket further down.
    let config = AppConfig::load().context("failed to load configuration")?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        platform = %config.platform,
        "Configuration loaded"
    );

    let database = Database::connect(&config.database)
        .await
        .context("failed to open database connection")?;
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to apply migrations")?;
    }

    let users = Arc::new(UserService::new(Arc::new(PgUserStore::new(&database))));
    let hits = Arc::new(HitCounter::new());
    let config = Arc::new(config);

    let state = AppState {
        users,
        hits,
        config: Arc::clone(&config),
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
