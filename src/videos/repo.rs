use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::VideoBody;

const VIDEO_COLUMNS: &str = "\
    id, title, description, video_url, thumbnail, duration, views, active, \
    sort_order, created_at, updated_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub views: i64,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl Video {
    pub async fn list(
        db: &PgPool,
        skip: i64,
        limit: i64,
        active_only: bool,
    ) -> anyhow::Result<Vec<Video>> {
        let query = format!(
            "SELECT {VIDEO_COLUMNS} FROM videos \
             WHERE (NOT $3::boolean OR active) \
             ORDER BY sort_order LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Video>(&query)
            .bind(limit)
            .bind(skip)
            .bind(active_only)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, body: &VideoBody) -> anyhow::Result<Video> {
        let query = format!(
            "INSERT INTO videos \
                (title, description, video_url, thumbnail, duration, active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {VIDEO_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Video>(&query)
            .bind(&body.title)
            .bind(&body.description)
            .bind(&body.video_url)
            .bind(&body.thumbnail)
            .bind(&body.duration)
            .bind(body.active)
            .bind(body.sort_order)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    /// Full replace; the view counter survives.
    pub async fn replace(db: &PgPool, id: i64, body: &VideoBody) -> anyhow::Result<Option<Video>> {
        let query = format!(
            "UPDATE videos SET \
                title = $2, description = $3, video_url = $4, thumbnail = $5, \
                duration = $6, active = $7, sort_order = $8, updated_at = now() \
             WHERE id = $1 \
             RETURNING {VIDEO_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&body.title)
            .bind(&body.description)
            .bind(&body.video_url)
            .bind(&body.thumbnail)
            .bind(&body.duration)
            .bind(body.active)
            .bind(body.sort_order)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
