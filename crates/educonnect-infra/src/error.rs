//! HTTP error response body
//!
//! `IntoResponse` for `AppError` lives in educonnect-api: the orphan rule keeps
//! axum's trait and the core error type from meeting in a library crate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `detail` is the short human-readable reason. `details` and `error_type` are
/// only filled outside production and never for sensitive errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
    pub recoverable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}
