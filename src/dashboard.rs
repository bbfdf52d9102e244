//! Entity counts for the admin dashboard landing page.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::{auth::extractors::AdminUser, error::ApiResult, state::AppState};

#[derive(Debug, Serialize, FromRow)]
pub struct DashboardStats {
    pub articles: i64,
    pub gallery: i64,
    pub testimonials: i64,
    pub contacts: i64,
    pub sliders: i64,
    pub certificates: i64,
    pub services: i64,
    pub videos: i64,
    pub unread_contacts: i64,
    pub pending_testimonials: i64,
    pub pending_comments: i64,
}

pub fn admin_router() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(dashboard_stats))
}

async fn load_stats(db: &PgPool) -> anyhow::Result<DashboardStats> {
    let stats = sqlx::query_as::<_, DashboardStats>(
        "SELECT \
            (SELECT COUNT(*) FROM articles)      AS articles, \
            (SELECT COUNT(*) FROM gallery_items) AS gallery, \
            (SELECT COUNT(*) FROM testimonials)  AS testimonials, \
            (SELECT COUNT(*) FROM contacts)      AS contacts, \
            (SELECT COUNT(*) FROM sliders)       AS sliders, \
            (SELECT COUNT(*) FROM certificates)  AS certificates, \
            (SELECT COUNT(*) FROM services)      AS services, \
            (SELECT COUNT(*) FROM videos)        AS videos, \
            (SELECT COUNT(*) FROM contacts WHERE NOT read)          AS unread_contacts, \
            (SELECT COUNT(*) FROM testimonials WHERE NOT approved)  AS pending_testimonials, \
            (SELECT COUNT(*) FROM comments WHERE NOT approved)      AS pending_comments",
    )
    .fetch_one(db)
    .await?;
    Ok(stats)
}

#[instrument(skip_all)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> ApiResult<Json<DashboardStats>> {
    Ok(Json(load_stats(&state.db).await?))
}
