use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{CertificateBody, CertificatePatch},
    repo::Certificate,
};
use crate::{
    auth::extractors::AdminUser,
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/certificates", get(list_certificates))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/certificates",
            get(list_certificates_admin).post(create_certificate),
        )
        .route(
            "/certificates/:id",
            patch(patch_certificate).delete(delete_certificate),
        )
}

#[instrument(skip(state))]
pub async fn list_certificates(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Certificate>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Certificate::list(&state.db, skip, limit).await?))
}

#[instrument(skip_all)]
pub async fn list_certificates_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Certificate>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Certificate::list(&state.db, skip, limit).await?))
}

#[instrument(skip(state, body))]
pub async fn create_certificate(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<CertificateBody>,
) -> ApiResult<(StatusCode, Json<Certificate>)> {
    body.validate()?;
    let row = Certificate::create(&state.db, &body).await?;
    info!(id = row.id, "certificate created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, body))]
pub async fn patch_certificate(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<CertificatePatch>,
) -> ApiResult<Json<Certificate>> {
    body.validate()?;
    let mut row = Certificate::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("certificate"))?;
    // An empty patch is a no-op, not a touch.
    if body.is_empty() {
        return Ok(Json(row));
    }
    body.apply(&mut row);
    let saved = Certificate::save(&state.db, &row).await?;
    Ok(Json(saved))
}

#[instrument(skip(state))]
pub async fn delete_certificate(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Certificate::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("certificate"));
    }
    info!(id, "certificate deleted");
    Ok(StatusCode::NO_CONTENT)
}
