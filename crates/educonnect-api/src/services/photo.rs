//! Photo store operations
//!
//! Encodes accepted uploads into photo documents and turns stored documents
//! back into metadata-only listings.

use std::sync::Arc;

use chrono::Utc;
use educonnect_core::models::{PhotoDocument, PhotoListResponse, PhotoMetadata};
use educonnect_core::AppError;
use educonnect_db::{photo_metadata_from_document, PhotoRepository};

#[derive(Clone)]
pub struct PhotoService {
    repository: Arc<dyn PhotoRepository>,
}

impl PhotoService {
    pub fn new(repository: Arc<dyn PhotoRepository>) -> Self {
        Self { repository }
    }

    /// Encode and insert one photo, returning the store-assigned id.
    ///
    /// A failed insert is returned as-is; there is no retry.
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %filename, content_type = %content_type, file_size = data.len())
    )]
    pub async fn store(
        &self,
        data: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<String, AppError> {
        let document = PhotoDocument::encode(data, filename, content_type, Utc::now());
        let photo_id = self.repository.insert_photo(&document).await?;

        tracing::debug!(photo_id = %photo_id, "Photo document inserted");
        Ok(photo_id)
    }

    /// One page of photo metadata. `count` is the page length.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, limit: u64, skip: u64) -> Result<PhotoListResponse, AppError> {
        let documents = self.repository.list_photo_documents(limit, skip).await?;

        let photos = documents
            .iter()
            .map(photo_metadata_from_document)
            .collect::<Result<Vec<PhotoMetadata>, AppError>>()?;

        Ok(PhotoListResponse::from(photos))
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
