use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::CertificateBody;

const CERTIFICATE_COLUMNS: &str = "\
    id, title, issuer, date, description, icon, color, gradient, image, \
    slider_id, kind, kind_label, created_at, updated_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Certificate {
    pub id: i64,
    pub title: String,
    pub issuer: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub icon: String,
    pub color: Option<String>,
    pub gradient: Option<String>,
    pub image: Option<String>,
    pub slider_id: Option<i64>,
    pub kind: Option<String>,
    pub kind_label: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl Certificate {
    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> anyhow::Result<Vec<Certificate>> {
        let query = format!(
            "SELECT {CERTIFICATE_COLUMNS} FROM certificates \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Certificate>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: i64) -> anyhow::Result<Option<Certificate>> {
        let query = format!("SELECT {CERTIFICATE_COLUMNS} FROM certificates WHERE id = $1");
        let row = sqlx::query_as::<_, Certificate>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, body: &CertificateBody) -> anyhow::Result<Certificate> {
        let query = format!(
            "INSERT INTO certificates \
                (title, issuer, date, description, icon, color, gradient, \
                 image, slider_id, kind, kind_label) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {CERTIFICATE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Certificate>(&query)
            .bind(&body.title)
            .bind(&body.issuer)
            .bind(&body.date)
            .bind(&body.description)
            .bind(&body.icon)
            .bind(&body.color)
            .bind(&body.gradient)
            .bind(&body.image)
            .bind(body.slider_id)
            .bind(&body.kind)
            .bind(&body.kind_label)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    /// Writes back a row whose fields were already patched in memory.
    pub async fn save(db: &PgPool, row: &Certificate) -> anyhow::Result<Certificate> {
        let query = format!(
            "UPDATE certificates SET \
                title = $2, issuer = $3, date = $4, description = $5, icon = $6, \
                color = $7, gradient = $8, image = $9, slider_id = $10, \
                kind = $11, kind_label = $12, updated_at = now() \
             WHERE id = $1 \
             RETURNING {CERTIFICATE_COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Certificate>(&query)
            .bind(row.id)
            .bind(&row.title)
            .bind(&row.issuer)
            .bind(&row.date)
            .bind(&row.description)
            .bind(&row.icon)
            .bind(&row.color)
            .bind(&row.gradient)
            .bind(&row.image)
            .bind(row.slider_id)
            .bind(&row.kind)
            .bind(&row.kind_label)
            .fetch_one(db)
            .await?;
        Ok(saved)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
