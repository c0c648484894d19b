use axum::{extract::State, Json};
use educonnect_core::models::AttendanceRecord;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AttendanceState;

/// Every attendance record, with non-finite floats replaced by `null` and
/// `_id` rendered as a string. Records keep whatever fields they were stored with.
#[utoipa::path(
    get,
    path = "/get-attendance",
    tag = "attendance",
    responses(
        (status = 200, description = "Sanitized attendance records (JSON array of objects)", content_type = "application/json"),
        (status = 500, description = "Store read failed. `detail` is always the generic \"Failed to access database\"; the underlying error is only logged server-side", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(attendance), fields(operation = "get_attendance"))]
pub async fn get_attendance(
    State(attendance): State<AttendanceState>,
) -> Result<Json<Vec<AttendanceRecord>>, HttpAppError> {
    let records = attendance.reader.list_all().await?;
    tracing::debug!(count = records.len(), "Returning attendance records");
    Ok(Json(records))
}
