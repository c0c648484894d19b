//! EduConnect database layer
//!
//! Repository traits used by the API, their MongoDB implementations, and the
//! conversion of stored BSON documents into JSON-safe output.

pub mod db;
pub mod document;
pub mod traits;

pub use db::{DatabaseClient, MongoAttendanceRepository, MongoPhotoRepository};
pub use document::{
    id_to_string, photo_metadata_from_document, photo_to_document, sanitize_document,
    sanitize_value,
};
pub use traits::{AttendanceRepository, PhotoRepository};

// Re-exported so callers and tests can build documents without a direct bson dependency.
pub use mongodb::bson;
