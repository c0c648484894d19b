use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Upper bound on an incoming request id; longer values are replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Request ID stored in request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

fn incoming_request_id(request: &Request) -> Option<String> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
}

/// Request ID middleware
///
/// Reuses a caller-supplied `X-Request-ID` when it is usable, otherwise
/// generates a UUID. The id is stored in request extensions and echoed on the
/// response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = incoming_request_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "Request received"
    );

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

/// Extract request ID from request extensions
pub fn get_request_id(request: &Request) -> Option<String> {
    request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use axum_test::TestServer;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(id): Extension<RequestId>| async move { id.0 }),
            )
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let server = TestServer::new(app()).unwrap();
        let response = server.get("/").await;

        let header = response.header(REQUEST_ID_HEADER);
        let id = header.to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(response.text(), id);
    }

    #[tokio::test]
    async fn test_echoes_incoming_request_id() {
        let server = TestServer::new(app()).unwrap();
        let response = server
            .get("/")
            .add_header(REQUEST_ID_HEADER, "trace-abc-123")
            .await;

        assert_eq!(response.header(REQUEST_ID_HEADER), "trace-abc-123");
        assert_eq!(response.text(), "trace-abc-123");
    }

    #[tokio::test]
    async fn test_replaces_oversized_request_id() {
        let server = TestServer::new(app()).unwrap();
        let oversized = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        let response = server
            .get("/")
            .add_header(REQUEST_ID_HEADER, oversized.as_str())
            .await;

        let id = response.header(REQUEST_ID_HEADER);
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }
}
