use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::GalleryItemBody;

const GALLERY_COLUMNS: &str = "\
    id, title, description, full_description, icon, gradient, image, \
    slider_id, category, category_color, date, duration, views, comments, \
    technologies, model_url, model_type, iframe_url, created_at, updated_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    pub icon: String,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    pub category: String,
    pub category_color: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
    pub views: i64,
    pub comments: i64,
    pub technologies: Vec<String>,
    pub model_url: Option<String>,
    pub model_type: String,
    pub iframe_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl GalleryItem {
    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> anyhow::Result<Vec<GalleryItem>> {
        let query = format!(
            "SELECT {GALLERY_COLUMNS} FROM gallery_items \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, GalleryItem>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn get_and_count_view(db: &PgPool, id: i64) -> anyhow::Result<Option<GalleryItem>> {
        let query = format!(
            "UPDATE gallery_items SET views = views + 1 WHERE id = $1 RETURNING {GALLERY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, body: &GalleryItemBody) -> anyhow::Result<GalleryItem> {
        let query = format!(
            "INSERT INTO gallery_items \
                (title, description, full_description, icon, gradient, image, \
                 slider_id, category, category_color, date, duration, \
                 technologies, model_url, model_type, iframe_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {GALLERY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&body.title)
            .bind(&body.description)
            .bind(&body.full_description)
            .bind(&body.icon)
            .bind(&body.gradient)
            .bind(&body.image)
            .bind(body.slider_id)
            .bind(&body.category)
            .bind(&body.category_color)
            .bind(&body.date)
            .bind(&body.duration)
            .bind(&body.technologies)
            .bind(&body.model_url)
            .bind(&body.model_type)
            .bind(&body.iframe_url)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    pub async fn replace(
        db: &PgPool,
        id: i64,
        body: &GalleryItemBody,
    ) -> anyhow::Result<Option<GalleryItem>> {
        let query = format!(
            "UPDATE gallery_items SET \
                title = $2, description = $3, full_description = $4, icon = $5, \
                gradient = $6, image = $7, slider_id = $8, category = $9, \
                category_color = $10, date = $11, duration = $12, \
                technologies = $13, model_url = $14, model_type = $15, \
                iframe_url = $16, updated_at = now() \
             WHERE id = $1 \
             RETURNING {GALLERY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&body.title)
            .bind(&body.description)
            .bind(&body.full_description)
            .bind(&body.icon)
            .bind(&body.gradient)
            .bind(&body.image)
            .bind(body.slider_id)
            .bind(&body.category)
            .bind(&body.category_color)
            .bind(&body.date)
            .bind(&body.duration)
            .bind(&body.technologies)
            .bind(&body.model_url)
            .bind(&body.model_type)
            .bind(&body.iframe_url)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
