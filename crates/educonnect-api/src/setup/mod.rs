//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;
pub mod services;
pub mod validation;

use std::sync::Arc;

use anyhow::{Context, Result};
use educonnect_core::Config;
use educonnect_db::DatabaseClient;
use educonnect_infra::NotifierHandle;

use crate::state::AppState;

/// A fully wired application and the resources it must release on exit.
pub struct App {
    pub state: Arc<AppState>,
    pub router: axum::Router,
    pub database: DatabaseClient,
    pub notifier: Option<NotifierHandle>,
}

impl App {
    /// Stop the notifier, close database connections and flush telemetry.
    pub async fn shutdown(self) {
        if let Some(notifier) = self.notifier {
            notifier.shutdown().await;
        }
        self.database.shutdown().await;
        educonnect_infra::shutdown_telemetry().await;
    }
}

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<App> {
    educonnect_infra::init_telemetry(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.is_production(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let database = database::setup_database(&config).await?;

    let (state, notifier) = services::initialize_services(&config, &database)?;

    let router = routes::setup_routes(&config, state.clone())?;

    Ok(App {
        state,
        router,
        database,
        notifier,
    })
}
