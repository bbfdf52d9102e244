use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, email, password_hash, full_name, is_active, is_admin, created_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    pub async fn list(db: &PgPool, skip: i64, limit: i64) -> anyhow::Result<Vec<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let users = sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(db)
            .await?;
        Ok(users)
    }

    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        full_name: Option<&str>,
        is_admin: bool,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, full_name, is_admin) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password_hash)
            .bind(full_name)
            .bind(is_admin)
            .fetch_one(db)
            .await
    }

    /// Full replace of the account fields. The password hash only changes
    /// when a new one is supplied.
    pub async fn replace(
        db: &PgPool,
        id: Uuid,
        email: &str,
        full_name: Option<&str>,
        is_active: bool,
        is_admin: bool,
        new_password_hash: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                email = $2, \
                full_name = $3, \
                is_active = $4, \
                is_admin = $5, \
                password_hash = COALESCE($6, password_hash) \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(email)
            .bind(full_name)
            .bind(is_active)
            .bind(is_admin)
            .bind(new_password_hash)
            .fetch_optional(db)
            .await
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
