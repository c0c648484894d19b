//! Application state and sub-state extractors.
//!
//! Handlers extract only the sub-state they need via Axum's `FromRef`.

use std::sync::Arc;

use educonnect_core::{Config, UploadValidator};
use educonnect_db::{AttendanceRepository, PhotoRepository};
use educonnect_infra::UploadNotifier;

use crate::services::{AttendanceReader, PhotoService};

/// Photo ingestion and listing
#[derive(Clone)]
pub struct PhotoState {
    pub service: PhotoService,
    pub validator: UploadValidator,
    pub notifier: UploadNotifier,
}

#[derive(Clone)]
pub struct AttendanceState {
    pub reader: AttendanceReader,
}

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub photos: PhotoState,
    pub attendance: AttendanceState,
}

impl AppState {
    pub fn new(
        config: &Config,
        photo_repository: Arc<dyn PhotoRepository>,
        attendance_repository: Arc<dyn AttendanceRepository>,
        notifier: UploadNotifier,
    ) -> Self {
        let validator = UploadValidator::new(
            config.max_file_size_bytes(),
            config.allowed_content_types().to_vec(),
        );

        Self {
            photos: PhotoState {
                service: PhotoService::new(photo_repository),
                validator,
                notifier,
            },
            attendance: AttendanceState {
                reader: AttendanceReader::new(attendance_repository),
            },
        }
    }
}

impl axum::extract::FromRef<Arc<AppState>> for PhotoState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.photos.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for AttendanceState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.attendance.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
