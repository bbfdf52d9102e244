use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::ContactBody, repo::Contact};
use crate::{
    auth::extractors::AdminUser,
    dto::{MessageResponse, Pagination},
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/:id", axum::routing::delete(delete_contact))
        .route("/contacts/:id/read", patch(mark_contact_read))
}

#[instrument(skip(state, body))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactBody>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    body.validate()?;
    let row = Contact::create(&state.db, &body).await?;
    info!(id = row.id, "contact message received");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "your message has been sent",
        }),
    ))
}

#[instrument(skip_all)]
pub async fn list_contacts(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Contact>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Contact::list(&state.db, skip, limit).await?))
}

#[instrument(skip(state))]
pub async fn mark_contact_read(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Contact>> {
    let row = Contact::mark_read(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("contact message"))?;
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Contact::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("contact message"));
    }
    info!(id, "contact message deleted");
    Ok(StatusCode::NO_CONTENT)
}
