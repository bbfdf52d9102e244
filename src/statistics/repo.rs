use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::dto::StatisticBody;

const STATISTIC_COLUMNS: &str = "id, number, label, icon, sort_order";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Statistic {
    pub id: i64,
    pub number: String,
    pub label: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

impl Statistic {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Statistic>> {
        let query = format!("SELECT {STATISTIC_COLUMNS} FROM statistics ORDER BY sort_order");
        let rows = sqlx::query_as::<_, Statistic>(&query).fetch_all(db).await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: i64) -> anyhow::Result<Option<Statistic>> {
        let query = format!("SELECT {STATISTIC_COLUMNS} FROM statistics WHERE id = $1");
        let row = sqlx::query_as::<_, Statistic>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, body: &StatisticBody) -> anyhow::Result<Statistic> {
        let query = format!(
            "INSERT INTO statistics (number, label, icon, sort_order) \
             VALUES ($1, $2, $3, $4) RETURNING {STATISTIC_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Statistic>(&query)
            .bind(&body.number)
            .bind(&body.label)
            .bind(&body.icon)
            .bind(body.sort_order)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    pub async fn save(db: &PgPool, row: &Statistic) -> anyhow::Result<Statistic> {
        let query = format!(
            "UPDATE statistics SET number = $2, label = $3, icon = $4, sort_order = $5 \
             WHERE id = $1 RETURNING {STATISTIC_COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Statistic>(&query)
            .bind(row.id)
            .bind(&row.number)
            .bind(&row.label)
            .bind(&row.icon)
            .bind(row.sort_order)
            .fetch_one(db)
            .await?;
        Ok(saved)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM statistics WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
