//! HTTP surface constants

pub const UPLOAD_PHOTO_PATH: &str = "/upload-photo/";
pub const LIST_PHOTOS_PATH: &str = "/list-photos/";
pub const ATTENDANCE_PATH: &str = "/get-attendance";

pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";
pub const DOCS_PATH: &str = "/docs";

/// Allowance for multipart boundaries and part headers on top of the file size
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub const READINESS_TIMEOUT_SECS: u64 = 5;
