use crate::{
    models::{DbHospitalAccount, DbSession},
    violation::classify,
};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_session(
    pool: &Pool<Postgres>,
    hospital_id: i32,
    expires_at: DateTime<Utc>,
) -> Result<DbSession> {
    let token = Uuid::new_v4();
    let now = Utc::now();

    let session = sqlx::query_as::<_, DbSession>(
        r#"
        INSERT INTO sessions (token, hospital_id, created_at, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING token, hospital_id, created_at, expires_at
        "#,
    )
    .bind(token)
    .bind(hospital_id)
    .bind(now)
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .map_err(classify)?;

    tracing::debug!("Session created: hospital_id={}, expires_at={}", hospital_id, expires_at);
    Ok(session)
}

/// Resolves a token to its hospital account. Expired sessions resolve to `None`.
pub async fn get_account_by_session(
    pool: &Pool<Postgres>,
    token: Uuid,
) -> Result<Option<DbHospitalAccount>> {
    let account = sqlx::query_as::<_, DbHospitalAccount>(
        r#"
        SELECT h.id, h.email, h.license_number, h.password_hash
        FROM sessions s
        JOIN hospitals h ON h.id = s.hospital_id
        WHERE s.token = $1 AND s.expires_at > NOW()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

pub async fn delete_session(pool: &Pool<Postgres>, token: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE token = $1
        "#,
    )
    .bind(token)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_expired_sessions(pool: &Pool<Postgres>) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE expires_at <= NOW()
        "#,
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
