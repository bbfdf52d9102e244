use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::ContactBody;

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, read, created_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: OffsetDateTime,
}

impl Contact {
    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> anyhow::Result<Vec<Contact>> {
        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Contact>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, body: &ContactBody) -> anyhow::Result<Contact> {
        let query = format!(
            "INSERT INTO contacts (name, email, subject, message) \
             VALUES ($1, $2, $3, $4) RETURNING {CONTACT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Contact>(&query)
            .bind(&body.name)
            .bind(&body.email)
            .bind(&body.subject)
            .bind(&body.message)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    pub async fn mark_read(db: &PgPool, id: i64) -> anyhow::Result<Option<Contact>> {
        let query =
            format!("UPDATE contacts SET read = TRUE WHERE id = $1 RETURNING {CONTACT_COLUMNS}");
        let row = sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
