//! Service and repository wiring

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use educonnect_core::Config;
use educonnect_db::DatabaseClient;
use educonnect_infra::{NotifierConfig, NotifierHandle, UploadNotifier};

use crate::state::AppState;

/// Start the notifier when a URL is configured; otherwise notifications are dropped.
pub fn setup_notifier(config: &Config) -> Result<(UploadNotifier, Option<NotifierHandle>)> {
    match config.notify_url() {
        Some(url) => {
            let (notifier, handle) = UploadNotifier::spawn(NotifierConfig {
                url: url.to_string(),
                timeout: Duration::from_secs(config.notify_timeout_seconds()),
                queue_capacity: config.notify_queue_capacity(),
            })?;
            Ok((notifier, Some(handle)))
        }
        None => {
            tracing::info!("NOTIFY_URL is empty, upload notifications disabled");
            Ok((UploadNotifier::disabled(), None))
        }
    }
}

pub fn initialize_services(
    config: &Config,
    database: &DatabaseClient,
) -> Result<(Arc<AppState>, Option<NotifierHandle>)> {
    let (notifier, handle) = setup_notifier(config)?;

    let state = AppState::new(
        config,
        Arc::new(database.photo_repository()),
        Arc::new(database.attendance_repository()),
        notifier,
    );

    Ok((Arc::new(state), handle))
}
