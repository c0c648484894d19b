//! Health check handlers

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::constants::READINESS_TIMEOUT_SECS;
use crate::state::AppState;

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - the document store answers a ping.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timeout = Duration::from_secs(READINESS_TIMEOUT_SECS);

    let mut response = serde_json::json!({
        "status": "ready",
        "database": "unknown"
    });

    let overall_ready = match tokio::time::timeout(timeout, state.photos.service.ping()).await {
        Ok(Ok(())) => {
            response["database"] = serde_json::json!("ready");
            true
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database readiness check failed");
            response["database"] = serde_json::json!("not_ready");
            false
        }
        Err(_) => {
            tracing::error!("Database readiness check timed out");
            response["database"] = serde_json::json!("timeout");
            false
        }
    };

    let status_code = if overall_ready {
        StatusCode::OK
    } else {
        response["status"] = serde_json::json!("not_ready");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
