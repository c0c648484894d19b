//! Router assembly: public routes, documentation and the layer stack.

mod health;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use educonnect_core::Config;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::constants::{
    ATTENDANCE_PATH, DOCS_PATH, LIST_PHOTOS_PATH, MULTIPART_OVERHEAD_BYTES, OPENAPI_JSON_PATH,
    UPLOAD_PHOTO_PATH,
};
use crate::handlers;
use crate::middleware::{reject_oversized_body, request_id_middleware};
use crate::state::AppState;

pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let http_concurrency_limit = config.http_concurrency_limit();
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let request_timeout_secs = config.request_timeout_secs();
    tracing::info!(request_timeout_secs, "Request timeout layer enabled");

    let body_limit = config.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES;

    let app = public_routes()
        .merge(photo_routes())
        .merge(attendance_routes())
        .with_state(state)
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_JSON_PATH).path(DOCS_PATH))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(TimeoutLayer::new(Duration::from_secs(request_timeout_secs)))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(axum::middleware::from_fn_with_state(
            body_limit,
            reject_oversized_body,
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware));

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<HeaderValue>, _>>()?;

        // Credentialed requests cannot use wildcard headers
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(methods)
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    };
    Ok(cors)
}

fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            OPENAPI_JSON_PATH,
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
}

fn photo_routes() -> Router<Arc<AppState>> {
    let upload_without_slash = UPLOAD_PHOTO_PATH.trim_end_matches('/');
    let list_without_slash = LIST_PHOTOS_PATH.trim_end_matches('/');

    Router::new()
        .route(UPLOAD_PHOTO_PATH, post(handlers::photo_upload::upload_photo))
        .route(upload_without_slash, post(handlers::photo_upload::upload_photo))
        .route(LIST_PHOTOS_PATH, get(handlers::photo_list::list_photos))
        .route(list_without_slash, get(handlers::photo_list::list_photos))
}

fn attendance_routes() -> Router<Arc<AppState>> {
    Router::new().route(ATTENDANCE_PATH, get(handlers::attendance::get_attendance))
}
