use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{ServiceBody, ServicePatch},
    repo::Service,
};
use crate::{
    auth::extractors::AdminUser,
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/services", get(list_services))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services_admin).post(create_service))
        .route("/services/:id", patch(patch_service).delete(delete_service))
}

#[instrument(skip(state))]
pub async fn list_services(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Service>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Service::list(&state.db, skip, limit, true).await?))
}

#[instrument(skip_all)]
pub async fn list_services_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Service>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Service::list(&state.db, skip, limit, false).await?))
}

#[instrument(skip(state, body))]
pub async fn create_service(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<ServiceBody>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    body.validate()?;
    let row = Service::create(&state.db, &body).await?;
    info!(id = row.id, "service created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, body))]
pub async fn patch_service(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<ServicePatch>,
) -> ApiResult<Json<Service>> {
    body.validate()?;
    let mut row = Service::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("service"))?;
    if body.is_empty() {
        return Ok(Json(row));
    }
    body.apply(&mut row);
    Ok(Json(Service::save(&state.db, &row).await?))
}

#[instrument(skip(state))]
pub async fn delete_service(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Service::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("service"));
    }
    info!(id, "service deleted");
    Ok(StatusCode::NO_CONTENT)
}
