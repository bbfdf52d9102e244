use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{CommentBody, CommentListQuery, CommentPatch},
    repo::{Comment, CommentStats},
};
use crate::{
    auth::extractors::AdminUser,
    error::{ApiError, ApiResult},
    state::AppState,
    validate,
};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments).post(submit_comment))
        .route("/comments/:id", get(get_comment))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments_admin))
        .route("/comments/stats", get(comment_stats))
        .route("/comments/:id", patch(patch_comment).delete(delete_comment))
        .route("/comments/:id/approve", patch(toggle_comment_approved))
}

/// Public listing is always restricted to approved comments; the filters
/// narrow within that set.
#[instrument(skip(state))]
pub async fn list_comments(
    State(state): State<AppState>,
    Query(q): Query<CommentListQuery>,
) -> ApiResult<Json<Vec<Comment>>> {
    if let Some(ct) = &q.content_type {
        validate::content_type("content_type", ct)?;
    }
    let rows = Comment::list(
        &state.db,
        q.skip.max(0),
        q.limit.clamp(1, 500),
        Some(true),
        q.content_type.as_deref(),
        q.content_id,
    )
    .await?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Comment>> {
    let row = Comment::get(&state.db, id)
        .await?
        .filter(|c| c.approved)
        .ok_or(ApiError::NotFound("comment"))?;
    Ok(Json(row))
}

#[instrument(skip(state, body))]
pub async fn submit_comment(
    State(state): State<AppState>,
    Json(body): Json<CommentBody>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    body.validate()?;
    let row = Comment::create(&state.db, &body).await?;
    info!(id = row.id, content_type = %row.content_type, "comment submitted");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip_all)]
pub async fn list_comments_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(q): Query<CommentListQuery>,
) -> ApiResult<Json<Vec<Comment>>> {
    let rows = Comment::list(
        &state.db,
        q.skip.max(0),
        q.limit.clamp(1, 500),
        None,
        q.content_type.as_deref(),
        q.content_id,
    )
    .await?;
    Ok(Json(rows))
}

#[instrument(skip_all)]
pub async fn comment_stats(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> ApiResult<Json<CommentStats>> {
    Ok(Json(Comment::stats(&state.db).await?))
}

#[instrument(skip(state, body))]
pub async fn patch_comment(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<CommentPatch>,
) -> ApiResult<Json<Comment>> {
    body.validate()?;
    let mut row = Comment::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("comment"))?;
    if body.is_empty() {
        return Ok(Json(row));
    }
    body.apply(&mut row);
    Ok(Json(Comment::save(&state.db, &row).await?))
}

#[instrument(skip(state))]
pub async fn toggle_comment_approved(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Comment>> {
    let row = Comment::toggle_approved(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("comment"))?;
    info!(id, approved = row.approved, "comment moderation toggled");
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Comment::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("comment"));
    }
    info!(id, "comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
