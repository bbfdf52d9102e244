use sqlx::PgPool;
use tracing::info;

use super::{password, repo::User};
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Look up by email and check the password. Unknown email and wrong password
/// produce the same `Unauthenticated` error on purpose.
pub async fn authenticate(db: &PgPool, email: &str, password_plain: &str) -> ApiResult<User> {
    let user = User::find_by_email(db, email)
        .await?
        .ok_or(ApiError::Unauthenticated)?;

    let ok = password::verify_password(password_plain, &user.password_hash)
        .map_err(|_| ApiError::Unauthenticated)?;
    if !ok {
        return Err(ApiError::Unauthenticated);
    }
    Ok(user)
}

/// Seed the admin account from config on startup if it does not exist yet.
pub async fn ensure_admin(state: &AppState) -> anyhow::Result<()> {
    let email = state.config.admin_email.trim().to_lowercase();
    if User::find_by_email(&state.db, &email).await?.is_some() {
        info!(email = %email, "admin user exists");
        return Ok(());
    }
    let hash = password::hash_password(&state.config.admin_password)?;
    User::create(&state.db, &email, &hash, Some("Admin"), true).await?;
    info!(email = %email, "admin user created");
    Ok(())
}
