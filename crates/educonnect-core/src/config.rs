//! Configuration module
//!
//! This module provides the configuration structures for the photo service,
//! including server, database, upload limits and the downstream notifier.

use std::env;

use crate::constants::{
    DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_ATTENDANCE_COLLECTION, DEFAULT_ATTENDANCE_DATABASE,
    DEFAULT_CORS_ORIGINS, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_NOTIFY_URL, DEFAULT_PHOTOS_COLLECTION,
    DEFAULT_PHOTOS_DATABASE, DEV_MONGO_DB_URL,
};

// Common constants
const SERVER_PORT: u16 = 8000;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const NOTIFY_TIMEOUT_SECS: u64 = 5;
const NOTIFY_QUEUE_CAPACITY: usize = 64;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Base configuration shared by every HTTP service
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// In-flight request cap for the whole router
    pub http_concurrency_limit: usize,
    pub request_timeout_secs: u64,
    pub environment: String,
}

/// Photo service configuration
#[derive(Clone, Debug)]
pub struct PhotoServiceConfig {
    pub base: BaseConfig,
    pub mongo_db_url: String,
    /// True when `MONGO_DB_URL` was not set and the local fallback is in use.
    pub mongo_db_url_is_fallback: bool,
    pub photos_database: String,
    pub photos_collection: String,
    pub attendance_database: String,
    pub attendance_collection: String,
    pub max_file_size_bytes: usize,
    pub allowed_content_types: Vec<String>,
    /// Empty disables the downstream notifier.
    pub notify_url: String,
    pub notify_timeout_seconds: u64,
    pub notify_queue_capacity: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<PhotoServiceConfig>);

impl Config {
    fn as_service(&self) -> &PhotoServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.as_service().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = PhotoServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_service().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.as_service().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_service().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_service().base.environment
    }

    pub fn db_max_connections(&self) -> u32 {
        self.as_service().base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.as_service().base.db_timeout_seconds
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_service().base.http_concurrency_limit
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.as_service().base.request_timeout_secs
    }

    pub fn mongo_db_url(&self) -> &str {
        &self.as_service().mongo_db_url
    }

    pub fn mongo_db_url_is_fallback(&self) -> bool {
        self.as_service().mongo_db_url_is_fallback
    }

    pub fn photos_database(&self) -> &str {
        &self.as_service().photos_database
    }

    pub fn photos_collection(&self) -> &str {
        &self.as_service().photos_collection
    }

    pub fn attendance_database(&self) -> &str {
        &self.as_service().attendance_database
    }

    pub fn attendance_collection(&self) -> &str {
        &self.as_service().attendance_collection
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.as_service().max_file_size_bytes
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.as_service().allowed_content_types
    }

    /// Notification endpoint, `None` when the notifier is disabled.
    pub fn notify_url(&self) -> Option<&str> {
        let url = self.as_service().notify_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }

    pub fn notify_timeout_seconds(&self) -> u64 {
        self.as_service().notify_timeout_seconds
    }

    pub fn notify_queue_capacity(&self) -> usize {
        self.as_service().notify_queue_capacity
    }
}

fn is_production_name(environment: &str) -> bool {
    let environment = environment.to_lowercase();
    environment == "production" || environment == "prod"
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl PhotoServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|s| split_list(&s))
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect());

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .map(|s| split_list(&s))
            .unwrap_or_else(|_| {
                DEFAULT_ALLOWED_CONTENT_TYPES
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        let (mongo_db_url, mongo_db_url_is_fallback) = match env::var("MONGO_DB_URL") {
            Ok(url) if !url.trim().is_empty() => (url, false),
            _ => (DEV_MONGO_DB_URL.to_string(), true),
        };

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .unwrap_or_else(|_| HTTP_CONCURRENCY_LIMIT.to_string())
                .parse()
                .unwrap_or(HTTP_CONCURRENCY_LIMIT),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(REQUEST_TIMEOUT_SECS),
            environment,
        };

        let config = PhotoServiceConfig {
            base,
            mongo_db_url,
            mongo_db_url_is_fallback,
            photos_database: env::var("PHOTOS_DATABASE")
                .unwrap_or_else(|_| DEFAULT_PHOTOS_DATABASE.to_string()),
            photos_collection: env::var("PHOTOS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_PHOTOS_COLLECTION.to_string()),
            attendance_database: env::var("ATTENDANCE_DATABASE")
                .unwrap_or_else(|_| DEFAULT_ATTENDANCE_DATABASE.to_string()),
            attendance_collection: env::var("ATTENDANCE_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_ATTENDANCE_COLLECTION.to_string()),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            allowed_content_types,
            notify_url: env::var("NOTIFY_URL").unwrap_or_else(|_| DEFAULT_NOTIFY_URL.to_string()),
            notify_timeout_seconds: env::var("NOTIFY_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| NOTIFY_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(NOTIFY_TIMEOUT_SECS),
            notify_queue_capacity: env::var("NOTIFY_QUEUE_CAPACITY")
                .unwrap_or_else(|_| NOTIFY_QUEUE_CAPACITY.to_string())
                .parse()
                .unwrap_or(NOTIFY_QUEUE_CAPACITY),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let is_production = is_production_name(&self.base.environment);

        if !self.mongo_db_url.starts_with("mongodb://")
            && !self.mongo_db_url.starts_with("mongodb+srv://")
        {
            return Err(anyhow::anyhow!(
                "MONGO_DB_URL must be a valid MongoDB connection string"
            ));
        }

        if is_production && self.mongo_db_url_is_fallback {
            return Err(anyhow::anyhow!(
                "MONGO_DB_URL must be set explicitly in production"
            ));
        }

        if is_production && self.base.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB cannot be 0"));
        }

        if self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!("ALLOWED_CONTENT_TYPES cannot be empty"));
        }

        if self.base.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT cannot be 0"));
        }

        if self.base.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS cannot be 0"));
        }

        if self.notify_queue_capacity == 0 {
            return Err(anyhow::anyhow!("NOTIFY_QUEUE_CAPACITY cannot be 0"));
        }

        if self.notify_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("NOTIFY_TIMEOUT_SECONDS cannot be 0"));
        }

        let notify_url = self.notify_url.trim();
        if !notify_url.is_empty()
            && !notify_url.starts_with("http://")
            && !notify_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!("NOTIFY_URL must be an http(s) URL"));
        }

        Ok(())
    }
}
