//! Shared constants and configuration defaults

/// Multipart field carrying the uploaded photo.
pub const UPLOAD_FIELD_NAME: &str = "image_data";

/// Content types accepted by the upload endpoint unless overridden.
pub const DEFAULT_ALLOWED_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Upload ceiling in MiB.
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;

/// Browser origins allowed during local development.
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
    "http://localhost:8000",
];

/// Local development fallback. Never valid in production.
pub const DEV_MONGO_DB_URL: &str = "mongodb://localhost:27017";

pub const DEFAULT_PHOTOS_DATABASE: &str = "Classroom_photos";
pub const DEFAULT_PHOTOS_COLLECTION: &str = "images";
pub const DEFAULT_ATTENDANCE_DATABASE: &str = "Classroom_photos";
pub const DEFAULT_ATTENDANCE_COLLECTION: &str = "attendance";

/// Downstream endpoint told about new classroom photos.
pub const DEFAULT_NOTIFY_URL: &str = "http://localhost:5000/fetch-classroom-photos";

/// Page size for photo listings when `limit` is omitted.
pub const DEFAULT_LIST_LIMIT: u64 = 10;
