//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use educonnect_core::Config;

/// Validate critical configuration values
///
/// Hard errors come from `Config::validate`; this adds the warnings that do
/// not stop startup.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    // Validate database connection settings
    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    let is_production = config.is_production();

    if !is_production && config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS allows all origins; browser credentials will not be sent");
    }

    match config.notify_url() {
        Some(url) if url.starts_with("http://") && is_production => {
            tracing::warn!(notify_url = %url, "Upload notifications use plain HTTP");
        }
        Some(_) => {}
        None => tracing::info!("Upload notifications disabled"),
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}
