use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use educonnect_core::{AppError, ErrorMetadata, LogLevel, ValidationError};
pub use educonnect_infra::ErrorResponse;

#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        HttpAppError(err.into())
    }
}

impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid multipart request: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for HttpAppError {
    fn from(rejection: QueryRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid query parameters: {}",
            rejection.body_text()
        )))
    }
}

/// Map a multipart stream error, keeping body-limit hits as 413.
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Request body too large".to_string())
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error,
                details = %error.detailed_message(),
                error_type = error_type,
                "Error occurred"
            );
        }
    }
}

fn is_production_env() -> bool {
    std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("APP_ENV"))
        .map(|env| env.to_lowercase() == "production" || env.to_lowercase() == "prod")
        .unwrap_or(false)
}

/// Build the response body; `details` and `error_type` only leave the
/// process outside production and never for sensitive errors.
pub fn error_body(app_error: &AppError, is_production: bool) -> ErrorResponse {
    let expose_details = !is_production && !app_error.is_sensitive();

    ErrorResponse {
        detail: app_error.client_message(),
        code: app_error.error_code().to_string(),
        recoverable: app_error.is_recoverable(),
        suggested_action: app_error.suggested_action().map(String::from),
        details: expose_details.then(|| app_error.detailed_message()),
        error_type: expose_details.then(|| app_error.error_type().to_string()),
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, Json(error_body(app_error, is_production_env()))).into_response()
    }
}
