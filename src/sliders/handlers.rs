use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::SliderBody, repo::Slider};
use crate::{
    auth::extractors::AdminUser,
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/sliders/:id", get(get_slider))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/sliders", get(list_sliders).post(create_slider))
        .route("/sliders/:id", put(replace_slider).delete(delete_slider))
}

#[instrument(skip(state))]
pub async fn get_slider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Slider>> {
    let row = Slider::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("slider"))?;
    Ok(Json(row))
}

#[instrument(skip_all)]
pub async fn list_sliders(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Slider>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Slider::list(&state.db, skip, limit).await?))
}

#[instrument(skip(state, body))]
pub async fn create_slider(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<SliderBody>,
) -> ApiResult<(StatusCode, Json<Slider>)> {
    body.validate()?;
    let row = Slider::create(&state.db, &body).await?;
    info!(id = row.id, name = %row.name, "slider created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, body))]
pub async fn replace_slider(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<SliderBody>,
) -> ApiResult<Json<Slider>> {
    body.validate()?;
    let row = Slider::replace(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("slider"))?;
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_slider(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Slider::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("slider"));
    }
    info!(id, "slider deleted");
    Ok(StatusCode::NO_CONTENT)
}
