use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Photo document as persisted: metadata plus the base64-encoded payload.
///
/// Base64 keeps the payload safe to round-trip through text-oriented document
/// storage. `file_size` is the length of the original bytes, not of the encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDocument {
    pub filename: String,
    pub content_type: String,
    pub image_data: String,
    pub upload_date: DateTime<Utc>,
    pub file_size: i64,
}

impl PhotoDocument {
    /// Encode raw bytes into a new document stamped with `upload_date`.
    pub fn encode(
        data: &[u8],
        filename: impl Into<String>,
        content_type: impl Into<String>,
        upload_date: DateTime<Utc>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            image_data: STANDARD.encode(data),
            upload_date,
            file_size: data.len() as i64,
        }
    }

    /// Decode `image_data` back into the original bytes.
    pub fn decode_image_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.image_data)
    }
}

/// Photo metadata returned by listings. Never carries the encoded payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhotoMetadata {
    #[serde(rename = "_id")]
    pub id: String,
    pub filename: String,
    pub content_type: String,
    pub upload_date: DateTime<Utc>,
    pub file_size: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadPhotoResponse {
    pub message: String,
    pub photo_id: String,
    pub filename: String,
}

impl UploadPhotoResponse {
    pub fn uploaded(photo_id: String, filename: String) -> Self {
        Self {
            message: "Photo uploaded successfully".to_string(),
            photo_id,
            filename,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PhotoListResponse {
    pub photos: Vec<PhotoMetadata>,
    /// Number of photos in this page, not the collection total.
    pub count: usize,
}

impl From<Vec<PhotoMetadata>> for PhotoListResponse {
    fn from(photos: Vec<PhotoMetadata>) -> Self {
        let count = photos.len();
        Self { photos, count }
    }
}
