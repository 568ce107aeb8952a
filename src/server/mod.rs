//! Daily word service
//!
//! A small HTTP service exposing the solution of the day at `GET /api/daily-word`.

pub mod config;
pub mod daily;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{AppState, DailyWordResponse, create_router};

use anyhow::{Context, Result};
use tokio::net::TcpListener;

/// Run the service until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server fails.
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.listen_addr;
    let app = create_router(AppState::new(&config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("word service listening on {}", addr);
    tracing::info!(
        epoch = %config.epoch,
        solutions = config.solutions.len(),
        "solution rotation loaded"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("word service failed")?;

    tracing::info!("word service shutting down");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
