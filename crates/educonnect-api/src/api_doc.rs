//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use educonnect_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EduConnect API",
        version = "0.1.0",
        description = "Classroom photo upload and listing, plus read access to attendance records."
    ),
    paths(
        handlers::photo_upload::upload_photo,
        handlers::photo_list::list_photos,
        handlers::attendance::get_attendance,
    ),
    components(schemas(
        models::UploadPhotoResponse,
        models::PhotoListResponse,
        models::PhotoMetadata,
        ErrorResponse,
    )),
    tags(
        (name = "photos", description = "Photo upload and metadata listing"),
        (name = "attendance", description = "Attendance records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_public_paths() {
        let spec = get_openapi_spec();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/upload-photo/"));
        assert!(paths.iter().any(|p| p.as_str() == "/list-photos/"));
        assert!(paths.iter().any(|p| p.as_str() == "/get-attendance"));
    }

    #[test]
    fn test_attendance_error_is_documented_as_generic() {
        let json = serde_json::to_value(get_openapi_spec()).unwrap();
        let description = json["paths"]["/get-attendance"]["get"]["responses"]["500"]
            ["description"]
            .as_str()
            .unwrap();
        assert!(description.contains("Failed to access database"));
    }
}
