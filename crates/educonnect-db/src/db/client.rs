use std::time::Duration;

use anyhow::{Context, Result};
use educonnect_core::Config;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

use super::{MongoAttendanceRepository, MongoPhotoRepository};

const APP_NAME: &str = "educonnect-api";

/// Explicitly constructed MongoDB handle.
///
/// Built once at startup, shared through application state, and closed with
/// [`DatabaseClient::shutdown`] after the server stops.
#[derive(Clone)]
pub struct DatabaseClient {
    client: Client,
    photos_database: String,
    photos_collection: String,
    attendance_database: String,
    attendance_collection: String,
}

impl DatabaseClient {
    /// Connect using the configured URL and verify the server answers a ping.
    pub async fn connect(config: &Config) -> Result<Self> {
        tracing::info!(
            max_connections = config.db_max_connections(),
            timeout_seconds = config.db_timeout_seconds(),
            "Connecting to MongoDB"
        );

        let mut options = ClientOptions::parse(config.mongo_db_url())
            .await
            .context("Failed to parse MONGO_DB_URL")?;
        let timeout = Duration::from_secs(config.db_timeout_seconds());
        options.app_name = Some(APP_NAME.to_string());
        options.max_pool_size = Some(config.db_max_connections());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;

        let db_client = Self {
            client,
            photos_database: config.photos_database().to_string(),
            photos_collection: config.photos_collection().to_string(),
            attendance_database: config.attendance_database().to_string(),
            attendance_collection: config.attendance_collection().to_string(),
        };

        db_client
            .ping()
            .await
            .context("Failed to reach MongoDB")?;

        tracing::info!(
            photos = %format!("{}.{}", db_client.photos_database, db_client.photos_collection),
            attendance = %format!("{}.{}", db_client.attendance_database, db_client.attendance_collection),
            "MongoDB connection established"
        );

        Ok(db_client)
    }

    pub async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.photos_database)
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }

    pub fn photo_repository(&self) -> MongoPhotoRepository {
        MongoPhotoRepository::new(
            self.client.database(&self.photos_database),
            &self.photos_collection,
        )
    }

    pub fn attendance_repository(&self) -> MongoAttendanceRepository {
        MongoAttendanceRepository::new(
            &self.client.database(&self.attendance_database),
            &self.attendance_collection,
        )
    }

    /// Close pooled connections. Waits for in-flight operations on other handles.
    pub async fn shutdown(self) {
        tracing::info!("Closing MongoDB connections");
        self.client.shutdown().await;
    }
}
