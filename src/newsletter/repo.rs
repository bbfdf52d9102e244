use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

const SUBSCRIBER_COLUMNS: &str = "id, email, active, created_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub active: bool,
    pub created_at: OffsetDateTime,
}

impl Subscriber {
    /// Insert, or reactivate a previously unsubscribed address. One statement
    /// so the email stays unique even under concurrent subscribes; the row is
    /// returned either way.
    pub async fn subscribe(db: &PgPool, email: &str) -> anyhow::Result<Subscriber> {
        let query = format!(
            "INSERT INTO newsletter_subscribers (email) VALUES ($1) \
             ON CONFLICT (email) DO UPDATE SET active = TRUE \
             RETURNING {SUBSCRIBER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Subscriber>(&query)
            .bind(email)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    pub async fn list_active(db: &PgPool, skip: i64, limit: i64) -> anyhow::Result<Vec<Subscriber>> {
        let query = format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM newsletter_subscribers \
             WHERE active = TRUE ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Subscriber>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }
}
