use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::SliderBody;

const SLIDER_COLUMNS: &str = "id, name, description, images, created_at, updated_at";

/// A named set of image URLs referenced by articles, gallery items, services
/// and certificates through a bare `slider_id` (no foreign key).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Slider {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl Slider {
    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> anyhow::Result<Vec<Slider>> {
        let query = format!(
            "SELECT {SLIDER_COLUMNS} FROM sliders \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Slider>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: i64) -> anyhow::Result<Option<Slider>> {
        let query = format!("SELECT {SLIDER_COLUMNS} FROM sliders WHERE id = $1");
        let row = sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    // sqlx::Error so a duplicate name surfaces as 409, not 500.
    pub async fn create(db: &PgPool, body: &SliderBody) -> Result<Slider, sqlx::Error> {
        let query = format!(
            "INSERT INTO sliders (name, description, images) \
             VALUES ($1, $2, $3) RETURNING {SLIDER_COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(&body.name)
            .bind(&body.description)
            .bind(&body.images)
            .fetch_one(db)
            .await
    }

    pub async fn replace(
        db: &PgPool,
        id: i64,
        body: &SliderBody,
    ) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!(
            "UPDATE sliders SET name = $2, description = $3, images = $4, updated_at = now() \
             WHERE id = $1 RETURNING {SLIDER_COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .bind(&body.name)
            .bind(&body.description)
            .bind(&body.images)
            .fetch_optional(db)
            .await
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
