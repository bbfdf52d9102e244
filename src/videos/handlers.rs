use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::VideoBody, repo::Video};
use crate::{
    auth::extractors::AdminUser,
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/videos", get(list_videos))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(list_videos_admin).post(create_video))
        .route("/videos/:id", put(replace_video).delete(delete_video))
}

#[instrument(skip(state))]
pub async fn list_videos(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Video>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Video::list(&state.db, skip, limit, true).await?))
}

#[instrument(skip_all)]
pub async fn list_videos_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Video>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Video::list(&state.db, skip, limit, false).await?))
}

#[instrument(skip(state, body))]
pub async fn create_video(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<VideoBody>,
) -> ApiResult<(StatusCode, Json<Video>)> {
    body.validate()?;
    let row = Video::create(&state.db, &body).await?;
    info!(id = row.id, "video created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, body))]
pub async fn replace_video(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<VideoBody>,
) -> ApiResult<Json<Video>> {
    body.validate()?;
    let row = Video::replace(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("video"))?;
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_video(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Video::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("video"));
    }
    info!(id, "video deleted");
    Ok(StatusCode::NO_CONTENT)
}
