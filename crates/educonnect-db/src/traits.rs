//! Repository trait abstractions
//!
//! These traits define the minimal interface the API needs from the document
//! store, allowing handlers and services to be tested without a database.

use async_trait::async_trait;
use educonnect_core::models::PhotoDocument;
use educonnect_core::AppError;
use mongodb::bson::Document;

/// Photo collection operations
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Insert a single photo document and return the store-assigned id as a string.
    async fn insert_photo(&self, photo: &PhotoDocument) -> Result<String, AppError>;

    /// Fetch up to `limit` documents after skipping `skip`, in the store's natural
    /// order, with `image_data` projected out.
    async fn list_photo_documents(&self, limit: u64, skip: u64)
        -> Result<Vec<Document>, AppError>;

    /// Round-trip to the store, used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Attendance collection operations
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Fetch every attendance document, unmodified.
    async fn fetch_all(&self) -> Result<Vec<Document>, AppError>;
}
