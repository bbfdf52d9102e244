use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::TestimonialBody, repo::Testimonial};
use crate::{
    auth::extractors::AdminUser,
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/testimonials",
        get(list_approved).post(submit_testimonial),
    )
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/testimonials",
            get(list_all_admin).post(create_testimonial_admin),
        )
        .route(
            "/testimonials/:id",
            put(replace_testimonial).delete(delete_testimonial),
        )
        .route("/testimonials/:id/approve", patch(approve_testimonial))
}

#[instrument(skip(state))]
pub async fn list_approved(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Testimonial>>> {
    let (skip, limit) = p.clamped();
    let rows = Testimonial::list(&state.db, skip, limit, Some(true)).await?;
    Ok(Json(rows))
}

/// Open submission; lands unapproved and invisible to the public list until
/// an admin flips it.
#[instrument(skip(state, body))]
pub async fn submit_testimonial(
    State(state): State<AppState>,
    Json(body): Json<TestimonialBody>,
) -> ApiResult<(StatusCode, Json<Testimonial>)> {
    body.validate()?;
    let row = Testimonial::create(&state.db, &body, false).await?;
    info!(id = row.id, "testimonial submitted");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip_all)]
pub async fn list_all_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Testimonial>>> {
    let (skip, limit) = p.clamped();
    let rows = Testimonial::list(&state.db, skip, limit, None).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, body))]
pub async fn create_testimonial_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<TestimonialBody>,
) -> ApiResult<(StatusCode, Json<Testimonial>)> {
    body.validate()?;
    let row = Testimonial::create(&state.db, &body, true).await?;
    info!(id = row.id, "testimonial created by admin");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, body))]
pub async fn replace_testimonial(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<TestimonialBody>,
) -> ApiResult<Json<Testimonial>> {
    body.validate()?;
    let row = Testimonial::replace(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("testimonial"))?;
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn approve_testimonial(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Testimonial>> {
    let row = Testimonial::approve(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("testimonial"))?;
    info!(id, "testimonial approved");
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Testimonial::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("testimonial"));
    }
    info!(id, "testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}
