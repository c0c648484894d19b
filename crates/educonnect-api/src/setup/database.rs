//! Database setup and initialization

use anyhow::{Context, Result};
use educonnect_core::Config;
use educonnect_db::DatabaseClient;

/// Connect to MongoDB and verify the server is reachable.
pub async fn setup_database(config: &Config) -> Result<DatabaseClient> {
    if config.mongo_db_url_is_fallback() {
        tracing::warn!("MONGO_DB_URL not set, using local development database");
    }

    DatabaseClient::connect(config)
        .await
        .context("Failed to connect to MongoDB")
}
