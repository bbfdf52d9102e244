use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};

use super::repo::Subscriber;
use crate::{
    auth::extractors::AdminUser,
    dto::{MessageResponse, Pagination},
    error::ApiResult,
    state::AppState,
    validate,
};

#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    pub email: String,
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/newsletter/subscribe", post(subscribe))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/newsletter/subscribers", get(list_subscribers))
}

#[instrument(skip(state, body))]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(mut body): Json<SubscribeBody>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    body.email = body.email.trim().to_lowercase();
    validate::email("email", &body.email)?;

    let row = Subscriber::subscribe(&state.db, &body.email).await?;
    info!(id = row.id, "newsletter subscription");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "subscribed to the newsletter",
        }),
    ))
}

#[instrument(skip_all)]
pub async fn list_subscribers(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Subscriber>>> {
    let (skip, limit) = p.clamped();
    Ok(Json(Subscriber::list_active(&state.db, skip, limit).await?))
}
