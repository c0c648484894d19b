use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use educonnect_core::constants::DEFAULT_LIST_LIMIT;
use educonnect_core::models::PhotoListResponse;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::PhotoState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPhotosQuery {
    /// Maximum number of photos to return
    #[serde(default = "default_limit")]
    #[param(default = 10, minimum = 0)]
    limit: u64,
    /// Number of photos to skip
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    skip: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

/// List photo metadata in the store's natural order.
///
/// `image_data` is never included. `count` is the number of items in this
/// page, not the collection size.
#[utoipa::path(
    get,
    path = "/list-photos/",
    tag = "photos",
    params(ListPhotosQuery),
    responses(
        (status = 200, description = "One page of photo metadata", body = PhotoListResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(photos, query), fields(operation = "list_photos"))]
pub async fn list_photos(
    State(photos): State<PhotoState>,
    query: Result<Query<ListPhotosQuery>, QueryRejection>,
) -> Result<Json<PhotoListResponse>, HttpAppError> {
    let Query(query) = query?;

    let response = photos.service.list(query.limit, query.skip).await?;

    tracing::debug!(
        limit = query.limit,
        skip = query.skip,
        count = response.count,
        "Listed photos"
    );

    Ok(Json(response))
}
