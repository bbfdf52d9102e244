use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::CommentBody;

const COMMENT_COLUMNS: &str = "\
    id, name, email, content, rating, approved, content_type, content_id, \
    created_at, updated_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub rating: i32,
    pub approved: bool,
    pub content_type: String,
    pub content_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

/// Moderation overview for the admin dashboard.
#[derive(Debug, Serialize, FromRow)]
pub struct CommentStats {
    pub total: i64,
    pub approved: i64,
    pub pending: i64,
    pub average_rating: f64,
}

impl Comment {
    pub async fn list(
        db: &PgPool,
        skip: i64,
        limit: i64,
        approved: Option<bool>,
        content_type: Option<&str>,
        content_id: Option<i64>,
    ) -> anyhow::Result<Vec<Comment>> {
        let query = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE ($3::boolean IS NULL OR approved = $3) \
               AND ($4::text IS NULL OR content_type = $4) \
               AND ($5::bigint IS NULL OR content_id = $5) \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Comment>(&query)
            .bind(limit)
            .bind(skip)
            .bind(approved)
            .bind(content_type)
            .bind(content_id)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: i64) -> anyhow::Result<Option<Comment>> {
        let query = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, body: &CommentBody) -> anyhow::Result<Comment> {
        let query = format!(
            "INSERT INTO comments (name, email, content, rating, content_type, content_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Comment>(&query)
            .bind(&body.name)
            .bind(&body.email)
            .bind(&body.content)
            .bind(body.rating)
            .bind(&body.content_type)
            .bind(body.content_id)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    pub async fn save(db: &PgPool, row: &Comment) -> anyhow::Result<Comment> {
        let query = format!(
            "UPDATE comments SET \
                name = $2, email = $3, content = $4, rating = $5, \
                approved = $6, updated_at = now() \
             WHERE id = $1 RETURNING {COMMENT_COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Comment>(&query)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.email)
            .bind(&row.content)
            .bind(row.rating)
            .bind(row.approved)
            .fetch_one(db)
            .await?;
        Ok(saved)
    }

    /// Flip moderation state, returning the updated row.
    pub async fn toggle_approved(db: &PgPool, id: i64) -> anyhow::Result<Option<Comment>> {
        let query = format!(
            "UPDATE comments SET approved = NOT approved, updated_at = now() \
             WHERE id = $1 RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn stats(db: &PgPool) -> anyhow::Result<CommentStats> {
        let stats = sqlx::query_as::<_, CommentStats>(
            "SELECT \
                COUNT(*) AS total, \
                COUNT(*) FILTER (WHERE approved) AS approved, \
                COUNT(*) FILTER (WHERE NOT approved) AS pending, \
                COALESCE(AVG(rating) FILTER (WHERE approved), 0)::float8 AS average_rating \
             FROM comments",
        )
        .fetch_one(db)
        .await?;
        Ok(stats)
    }
}
