//! Multipart extraction for photo uploads

use axum::extract::Multipart;
use educonnect_core::constants::UPLOAD_FIELD_NAME;
use educonnect_core::{AppError, UploadValidator};

use crate::error::multipart_error;

const UNKNOWN_FILENAME: &str = "unknown";

/// The single file part of an upload request, already validated.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub filename: String,
    /// Declared content type, exactly as sent
    pub content_type: String,
}

/// Read the `image_data` part of a multipart request.
///
/// The declared content type is checked before any payload bytes are read.
/// The payload is then buffered chunk by chunk and the read is abandoned as
/// soon as it passes the size ceiling. Other fields are skipped; a second
/// `image_data` part is rejected.
pub async fn extract_photo_field(
    mut multipart: Multipart,
    validator: &UploadValidator,
) -> Result<UploadedFile, AppError> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            tracing::debug!(field = ?field.name(), "Ignoring multipart field");
            continue;
        }

        if upload.is_some() {
            return Err(AppError::InvalidInput(format!(
                "Multiple '{}' fields are not allowed; send exactly one file",
                UPLOAD_FIELD_NAME
            )));
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_FILENAME.to_string());
        let declared = field.content_type().unwrap_or_default().to_string();

        let content_type = validator.validate_content_type(&declared).inspect_err(|_| {
            tracing::warn!(
                filename = %filename,
                content_type = %declared,
                "Rejected upload with unsupported content type"
            );
        })?;

        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            validator
                .validate_file_size(data.len() + chunk.len())
                .inspect_err(|_| {
                    tracing::warn!(
                        filename = %filename,
                        max_bytes = validator.max_file_size(),
                        "Rejected oversized upload"
                    );
                })?;
            data.extend_from_slice(&chunk);
        }

        upload = Some(UploadedFile {
            data,
            filename,
            content_type,
        });
    }

    upload.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))
}
