use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::TestimonialBody;

const TESTIMONIAL_COLUMNS: &str =
    "id, name, role, avatar, text, rating, date, project, approved, created_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
    pub text: String,
    pub rating: i32,
    pub date: Option<String>,
    pub project: Option<String>,
    pub approved: bool,
    pub created_at: OffsetDateTime,
}

impl Testimonial {
    /// `approved = None` lists everything (admin view).
    pub async fn list(
        db: &PgPool,
        skip: i64,
        limit: i64,
        approved: Option<bool>,
    ) -> anyhow::Result<Vec<Testimonial>> {
        let query = format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials \
             WHERE ($3::boolean IS NULL OR approved = $3) \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .bind(skip)
            .bind(approved)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        body: &TestimonialBody,
        approved: bool,
    ) -> anyhow::Result<Testimonial> {
        let query = format!(
            "INSERT INTO testimonials (name, role, avatar, text, rating, date, project, approved) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {TESTIMONIAL_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Testimonial>(&query)
            .bind(&body.name)
            .bind(&body.role)
            .bind(&body.avatar)
            .bind(&body.text)
            .bind(body.rating)
            .bind(&body.date)
            .bind(&body.project)
            .bind(approved)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    /// Full replace of the submitted fields; moderation state is untouched.
    pub async fn replace(
        db: &PgPool,
        id: i64,
        body: &TestimonialBody,
    ) -> anyhow::Result<Option<Testimonial>> {
        let query = format!(
            "UPDATE testimonials SET \
                name = $2, role = $3, avatar = $4, text = $5, rating = $6, \
                date = $7, project = $8 \
             WHERE id = $1 \
             RETURNING {TESTIMONIAL_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&body.name)
            .bind(&body.role)
            .bind(&body.avatar)
            .bind(&body.text)
            .bind(body.rating)
            .bind(&body.date)
            .bind(&body.project)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn approve(db: &PgPool, id: i64) -> anyhow::Result<Option<Testimonial>> {
        let query = format!(
            "UPDATE testimonials SET approved = TRUE WHERE id = $1 RETURNING {TESTIMONIAL_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
