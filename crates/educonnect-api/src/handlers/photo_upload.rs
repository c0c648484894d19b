use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use educonnect_core::models::UploadPhotoResponse;
use educonnect_infra::UploadNotification;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::PhotoState;
use crate::utils::upload::extract_photo_field;

/// Upload photo handler
///
/// Validates the declared content type, buffers the `image_data` part up to
/// the size ceiling, stores it base64-encoded, and queues a downstream
/// notification once the insert has succeeded. The notification outcome never
/// reaches this response.
///
/// # Errors
/// - `AppError::InvalidInput` - missing file or malformed multipart body
/// - `AppError::UnsupportedContentType` - content type outside the allow-list
/// - `AppError::PayloadTooLarge` - payload exceeds the size ceiling
/// - `AppError::Database` - insert failed
#[utoipa::path(
    post,
    path = "/upload-photo/",
    tag = "photos",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Multipart form with a single `image_data` file part"),
    responses(
        (status = 200, description = "Photo uploaded successfully", body = UploadPhotoResponse),
        (status = 400, description = "Missing file, malformed body or unsupported type", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(photos, multipart), fields(operation = "upload_photo"))]
pub async fn upload_photo(
    State(photos): State<PhotoState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadPhotoResponse>, HttpAppError> {
    let file = extract_photo_field(multipart?, &photos.validator).await?;

    let photo_id = photos
        .service
        .store(&file.data, &file.filename, &file.content_type)
        .await?;

    tracing::info!(
        photo_id = %photo_id,
        filename = %file.filename,
        content_type = %file.content_type,
        file_size = file.data.len(),
        "Photo uploaded"
    );

    photos.notifier.notify(UploadNotification {
        photo_id: photo_id.clone(),
        filename: file.filename.clone(),
    });

    Ok(Json(UploadPhotoResponse::uploaded(photo_id, file.filename)))
}
