use axum::{
    extract::{FromRef, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Form, Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{CreateUser, LoginForm, ReplaceUser, TokenResponse, UserOut},
    extractors::{ActiveUser, AdminUser},
    jwt::JwtKeys,
    password, service,
    repo::User,
};
use crate::{
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
    validate,
};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", put(replace_user).delete(delete_user))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    let email = form.username.trim().to_lowercase();
    let user = service::authenticate(&state.db, &email, &form.password).await?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(&user.email).map_err(ApiError::Internal)?;

    info!(email = %user.email, "user logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

#[instrument(skip_all)]
pub async fn me(ActiveUser(user): ActiveUser) -> Json<UserOut> {
    Json(user.into())
}

#[instrument(skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<UserOut>>> {
    let (skip, limit) = p.clamped();
    let users = User::list(&state.db, skip, limit).await?;
    Ok(Json(users.into_iter().map(UserOut::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(mut payload): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<UserOut>)> {
    payload.email = payload.email.trim().to_lowercase();
    validate::email("email", &payload.email)?;
    validate::password("password", &payload.password)?;

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("email already registered".into()));
    }

    let hash = password::hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &payload.email,
        &hash,
        payload.full_name.as_deref(),
        payload.is_admin,
    )
    .await?;

    info!(user_id = %user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state, payload))]
pub async fn replace_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(mut payload): Json<ReplaceUser>,
) -> ApiResult<Json<UserOut>> {
    payload.email = payload.email.trim().to_lowercase();
    validate::email("email", &payload.email)?;

    let new_hash = match payload.password.as_deref() {
        Some(plain) => {
            validate::password("password", plain)?;
            Some(password::hash_password(plain)?)
        }
        None => None,
    };

    let user = User::replace(
        &state.db,
        id,
        &payload.email,
        payload.full_name.as_deref(),
        payload.is_active,
        payload.is_admin,
        new_hash.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound("user"))?;

    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if admin.id == id {
        return Err(ApiError::Conflict("cannot delete your own account".into()));
    }
    if !User::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("user"));
    }
    info!(user_id = %id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
