use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{StatisticBody, StatisticPatch},
    repo::Statistic,
};
use crate::{
    auth::extractors::AdminUser,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/statistics", get(list_statistics))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/statistics", post(create_statistic))
        .route(
            "/statistics/:id",
            patch(patch_statistic).delete(delete_statistic),
        )
}

#[instrument(skip(state))]
pub async fn list_statistics(State(state): State<AppState>) -> ApiResult<Json<Vec<Statistic>>> {
    Ok(Json(Statistic::list(&state.db).await?))
}

#[instrument(skip(state, body))]
pub async fn create_statistic(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<StatisticBody>,
) -> ApiResult<(StatusCode, Json<Statistic>)> {
    body.validate()?;
    let row = Statistic::create(&state.db, &body).await?;
    info!(id = row.id, "statistic created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, body))]
pub async fn patch_statistic(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<StatisticPatch>,
) -> ApiResult<Json<Statistic>> {
    body.validate()?;
    let mut row = Statistic::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("statistic"))?;
    if body.is_empty() {
        return Ok(Json(row));
    }
    body.apply(&mut row);
    Ok(Json(Statistic::save(&state.db, &row).await?))
}

#[instrument(skip(state))]
pub async fn delete_statistic(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Statistic::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("statistic"));
    }
    info!(id, "statistic deleted");
    Ok(StatusCode::NO_CONTENT)
}
