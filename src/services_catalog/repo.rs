use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::ServiceBody;

const SERVICE_COLUMNS: &str = "\
    id, title, description, icon, color, gradient, image, slider_id, \
    features, price, sort_order, active, created_at, updated_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub icon: String,
    pub color: String,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    pub features: Vec<String>,
    pub price: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl Service {
    /// `active_only` narrows to the public view.
    pub async fn list(
        db: &PgPool,
        skip: i64,
        limit: i64,
        active_only: bool,
    ) -> anyhow::Result<Vec<Service>> {
        let query = format!(
            "SELECT {SERVICE_COLUMNS} FROM services \
             WHERE (NOT $3::boolean OR active) \
             ORDER BY sort_order LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Service>(&query)
            .bind(limit)
            .bind(skip)
            .bind(active_only)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: i64) -> anyhow::Result<Option<Service>> {
        let query = format!("SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1");
        let row = sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, body: &ServiceBody) -> anyhow::Result<Service> {
        let query = format!(
            "INSERT INTO services \
                (title, description, icon, color, gradient, image, slider_id, \
                 features, price, sort_order, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {SERVICE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Service>(&query)
            .bind(&body.title)
            .bind(&body.description)
            .bind(&body.icon)
            .bind(&body.color)
            .bind(&body.gradient)
            .bind(&body.image)
            .bind(body.slider_id)
            .bind(&body.features)
            .bind(&body.price)
            .bind(body.sort_order)
            .bind(body.active)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    pub async fn save(db: &PgPool, row: &Service) -> anyhow::Result<Service> {
        let query = format!(
            "UPDATE services SET \
                title = $2, description = $3, icon = $4, color = $5, \
                gradient = $6, image = $7, slider_id = $8, features = $9, \
                price = $10, sort_order = $11, active = $12, updated_at = now() \
             WHERE id = $1 \
             RETURNING {SERVICE_COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Service>(&query)
            .bind(row.id)
            .bind(&row.title)
            .bind(&row.description)
            .bind(&row.icon)
            .bind(&row.color)
            .bind(&row.gradient)
            .bind(&row.image)
            .bind(row.slider_id)
            .bind(&row.features)
            .bind(&row.price)
            .bind(row.sort_order)
            .bind(row.active)
            .fetch_one(db)
            .await?;
        Ok(saved)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
