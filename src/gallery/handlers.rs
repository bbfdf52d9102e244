use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::GalleryItemBody, repo::GalleryItem};
use crate::{
    auth::extractors::AdminUser,
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(list_gallery))
        .route("/gallery/:id", get(get_gallery_item))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(list_gallery_admin).post(create_gallery_item))
        .route(
            "/gallery/:id",
            put(replace_gallery_item).delete(delete_gallery_item),
        )
}

#[instrument(skip(state))]
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<GalleryItem>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(GalleryItem::list(&state.db, skip, limit).await?))
}

#[instrument(skip(state))]
pub async fn get_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<GalleryItem>> {
    let item = GalleryItem::get_and_count_view(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("gallery item"))?;
    Ok(Json(item))
}

#[instrument(skip_all)]
pub async fn list_gallery_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<GalleryItem>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(GalleryItem::list(&state.db, skip, limit).await?))
}

#[instrument(skip(state, body))]
pub async fn create_gallery_item(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<GalleryItemBody>,
) -> ApiResult<(StatusCode, Json<GalleryItem>)> {
    body.validate()?;
    let item = GalleryItem::create(&state.db, &body).await?;
    info!(id = item.id, "gallery item created");
    Ok((StatusCode::CREATED, Json(item)))
}

#[instrument(skip(state, body))]
pub async fn replace_gallery_item(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<GalleryItemBody>,
) -> ApiResult<Json<GalleryItem>> {
    body.validate()?;
    let item = GalleryItem::replace(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("gallery item"))?;
    Ok(Json(item))
}

#[instrument(skip(state))]
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !GalleryItem::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("gallery item"));
    }
    info!(id, "gallery item deleted");
    Ok(StatusCode::NO_CONTENT)
}
