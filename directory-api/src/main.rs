//! directory-api binary
//!
//! Reads configuration from the environment (and `.env`), builds the
//! connection pool, serves HTTP until Ctrl+C / SIGTERM, then drains the pool.

use std::net::SocketAddr;

use directory_api::config::DbTlsMode;
use directory_api::{AppState, Config, api, db};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    if !config.is_complete() {
        tracing::error!(
            missing = ?config.missing,
            "Database environment variables are incomplete, check the .env file"
        );
    }
    if config.database.tls == DbTlsMode::AcceptInvalidCerts {
        tracing::warn!(
            "DB_SSL_ACCEPT_INVALID_CERTS is set: the database server certificate is NOT verified"
        );
    }
    tracing::info!(database = ?config.database, "Starting directory-api");

    let pool = db::create_pool(&config.database);
    let app = api::create_router(AppState::from_pool(pool.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("directory-api listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Draining database pool...");
    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Graceful shutdown handler
///
/// Listens for SIGTERM (container stop) and Ctrl+C signals
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
