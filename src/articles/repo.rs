use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::ArticleBody;

const ARTICLE_COLUMNS: &str = "\
    id, title, excerpt, full_content, category, icon, gradient, image, \
    slider_id, author, author_avatar, author_role, views, read_time, \
    featured, tags, iframe_url, model_url, model_type, created_at, updated_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub full_content: Option<String>,
    pub category: String,
    pub icon: String,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    pub author: String,
    pub author_avatar: Option<String>,
    pub author_role: Option<String>,
    pub views: i64,
    pub read_time: Option<String>,
    pub featured: bool,
    pub tags: Vec<String>,
    pub iframe_url: Option<String>,
    pub model_url: Option<String>,
    pub model_type: String,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl Article {
    pub async fn list(
        db: &PgPool,
        skip: i64,
        limit: i64,
        featured: Option<bool>,
    ) -> anyhow::Result<Vec<Article>> {
        let query = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles \
             WHERE ($3::boolean IS NULL OR featured = $3) \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Article>(&query)
            .bind(limit)
            .bind(skip)
            .bind(featured)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    /// Public detail fetch: increments the view counter in the same statement.
    pub async fn get_and_count_view(db: &PgPool, id: i64) -> anyhow::Result<Option<Article>> {
        let query = format!(
            "UPDATE articles SET views = views + 1 WHERE id = $1 RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, body: &ArticleBody) -> anyhow::Result<Article> {
        let query = format!(
            "INSERT INTO articles \
                (title, excerpt, full_content, category, icon, gradient, image, \
                 slider_id, author, author_avatar, author_role, read_time, \
                 featured, tags, iframe_url, model_url, model_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Article>(&query)
            .bind(&body.title)
            .bind(&body.excerpt)
            .bind(&body.full_content)
            .bind(&body.category)
            .bind(&body.icon)
            .bind(&body.gradient)
            .bind(&body.image)
            .bind(body.slider_id)
            .bind(&body.author)
            .bind(&body.author_avatar)
            .bind(&body.author_role)
            .bind(&body.read_time)
            .bind(body.featured)
            .bind(&body.tags)
            .bind(&body.iframe_url)
            .bind(&body.model_url)
            .bind(&body.model_type)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    /// Full replace: every mutable column is overwritten, even with values
    /// equal to the stored ones. The view counter survives.
    pub async fn replace(db: &PgPool, id: i64, body: &ArticleBody) -> anyhow::Result<Option<Article>> {
        let query = format!(
            "UPDATE articles SET \
                title = $2, excerpt = $3, full_content = $4, category = $5, \
                icon = $6, gradient = $7, image = $8, slider_id = $9, \
                author = $10, author_avatar = $11, author_role = $12, \
                read_time = $13, featured = $14, tags = $15, iframe_url = $16, \
                model_url = $17, model_type = $18, updated_at = now() \
             WHERE id = $1 \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&body.title)
            .bind(&body.excerpt)
            .bind(&body.full_content)
            .bind(&body.category)
            .bind(&body.icon)
            .bind(&body.gradient)
            .bind(&body.image)
            .bind(body.slider_id)
            .bind(&body.author)
            .bind(&body.author_avatar)
            .bind(&body.author_role)
            .bind(&body.read_time)
            .bind(body.featured)
            .bind(&body.tags)
            .bind(&body.iframe_url)
            .bind(&body.model_url)
            .bind(&body.model_type)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
