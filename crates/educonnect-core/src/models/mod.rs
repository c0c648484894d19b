//! Domain models

pub mod attendance;
pub mod photo;

pub use attendance::AttendanceRecord;
pub use photo::{PhotoDocument, PhotoListResponse, PhotoMetadata, UploadPhotoResponse};
