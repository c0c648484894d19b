//! Server startup and graceful shutdown

use anyhow::Result;
use axum::Router;
use educonnect_core::Config;

/// Serve until SIGINT/SIGTERM, then let in-flight requests finish.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port());
    tracing::info!(addr = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        max_upload_mb = config.max_file_size_bytes() / 1024 / 1024,
        allowed_content_types = %config.allowed_content_types().join(","),
        notifications = config.notify_url().is_some(),
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Signal handler for graceful shutdown
///
/// # Panics
/// Panics if the Ctrl+C or SIGTERM handler cannot be installed.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal");
        },
    }

    tracing::info!("Shutting down gracefully...");
}
