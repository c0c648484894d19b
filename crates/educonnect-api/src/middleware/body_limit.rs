//! Early rejection of request bodies whose declared length is over the limit

use axum::{
    extract::{Request, State},
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::{IntoResponse, Response},
};
use educonnect_core::AppError;

use crate::error::HttpAppError;
use crate::middleware::get_request_id;

fn declared_length(request: &Request) -> Option<u64> {
    request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Answer 413 with the JSON error body when `Content-Length` exceeds `limit`.
///
/// Bodies without a declared length are left to the streaming limit below
/// this layer, whose overflow surfaces as a multipart error.
pub async fn reject_oversized_body(
    State(limit): State<usize>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(declared) = declared_length(&request) {
        if declared > limit as u64 {
            tracing::warn!(
                request_id = ?get_request_id(&request),
                declared_bytes = declared,
                limit_bytes = limit,
                "Rejected oversized request body"
            );
            return HttpAppError(AppError::PayloadTooLarge(
                "Request body too large".to_string(),
            ))
            .into_response();
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware, routing::post, Router};
    use axum_test::TestServer;

    fn app(limit: usize) -> Router {
        Router::new()
            .route("/", post(|body: String| async move { body.len().to_string() }))
            .layer(middleware::from_fn_with_state(limit, reject_oversized_body))
    }

    #[tokio::test]
    async fn test_declared_length_over_limit_gets_json_413() {
        let server = TestServer::new(app(16)).unwrap();

        let response = server
            .post("/")
            .add_header("content-length", "17")
            .text("x".repeat(17))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(body["detail"], "Request body too large");
        assert_eq!(body["recoverable"], false);
    }

    #[tokio::test]
    async fn test_body_within_limit_passes() {
        let server = TestServer::new(app(16)).unwrap();

        let response = server
            .post("/")
            .add_header("content-length", "16")
            .text("x".repeat(16))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "16");
    }

    #[tokio::test]
    async fn test_missing_length_is_not_rejected_here() {
        let server = TestServer::new(app(16)).unwrap();

        let response = server.post("/").text("short").await;

        response.assert_status_ok();
    }
}
