//! The access gate: authenticated -> active -> admin.
//!
//! Each stage is its own extractor consuming the previous one, so a route
//! asks for exactly the guarantee it needs and nothing more.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::{jwt::JwtKeys, repo::User};
use crate::{error::ApiError, state::AppState};

/// Stage 1: a valid bearer token resolving to an existing user.
///
/// Missing header, bad scheme, bad signature, expired token, and unknown
/// subject all collapse into the same `Unauthenticated` rejection; callers
/// learn nothing about which check failed.
pub struct Authenticated(pub User);

/// Stage 2: an authenticated user whose account is active.
pub struct ActiveUser(pub User);

/// Stage 3: an active user with the admin flag.
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthenticated)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::Unauthenticated
        })?;

        // Infrastructure failures stay 500s; only a missing user collapses
        // into the uniform 401.
        let user = User::find_by_email(&state.db, &claims.sub)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Authenticated(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ActiveUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Authenticated(user) = Authenticated::from_request_parts(parts, state).await?;
        if !user.is_active {
            warn!(email = %user.email, "inactive account");
            return Err(ApiError::InactiveAccount);
        }
        Ok(ActiveUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ActiveUser(user) = ActiveUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            warn!(email = %user.email, "admin access denied");
            return Err(ApiError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
