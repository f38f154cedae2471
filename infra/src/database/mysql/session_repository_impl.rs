//! MySQL implementation of the SessionRepository trait.
//!
//! Rotation relies on `mark_used` being a single conditional `UPDATE`; the
//! affected-row count tells the caller whether it won.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sv_core::domain::entities::session::Session;
use sv_core::errors::DomainError;
use sv_core::repositories::SessionRepository;

const SESSION_COLUMNS: &str =
    "token, user_id, email, created_at, expires_at, ip_address, user_agent, used, last_used_at";

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        Ok(Session {
            token: row
                .try_get("token")
                .map_err(|e| DomainError::internal(format!("Failed to get token: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::internal(format!("Failed to get expires_at: {}", e)))?,
            client_ip: row
                .try_get("ip_address")
                .map_err(|e| DomainError::internal(format!("Failed to get ip_address: {}", e)))?,
            client_agent: row
                .try_get("user_agent")
                .map_err(|e| DomainError::internal(format!("Failed to get user_agent: {}", e)))?,
            used: row
                .try_get("used")
                .map_err(|e| DomainError::internal(format!("Failed to get used: {}", e)))?,
            last_used_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_used_at")
                .map_err(|e| DomainError::internal(format!("Failed to get last_used_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO sessions (
                token, user_id, email, created_at, expires_at,
                ip_address, user_agent, used, last_used_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&session.token)
            .bind(session.user_id.to_string())
            .bind(&session.email)
            .bind(session.issued_at)
            .bind(session.expires_at)
            .bind(&session.client_ip)
            .bind(&session.client_agent)
            .bind(session.used)
            .bind(session.last_used_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Validation {
                        message: "Session already exists".to_string(),
                    }
                }
                e => DomainError::internal(format!("Failed to save session: {}", e)),
            })?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let query = format!("SELECT {} FROM sessions WHERE token = ? LIMIT 1", SESSION_COLUMNS);

        let result = sqlx::query(&query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find session: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, token: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE sessions SET used = TRUE WHERE token = ? AND used = FALSE")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to mark session used: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn record_last_used(&self, token: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        sqlx::query("UPDATE sessions SET last_used_at = ? WHERE token = ?")
            .bind(at)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to record session use: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete session: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete user sessions: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn find_active_by_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Session>, DomainError> {
        let query = format!(
            "SELECT {} FROM sessions \
             WHERE user_id = ? AND used = FALSE AND expires_at > ? \
             ORDER BY created_at DESC",
            SESSION_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user sessions: {}", e)))?;

        rows.iter().map(Self::row_to_session).collect()
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::internal(format!("Failed to delete expired sessions: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    async fn count_active_by_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS active FROM sessions \
             WHERE user_id = ? AND used = FALSE AND expires_at > ?",
        )
        .bind(user_id.to_string())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to count user sessions: {}", e)))?;

        let count: i64 = row
            .try_get("active")
            .map_err(|e| DomainError::internal(format!("Failed to get session count: {}", e)))?;

        Ok(count.max(0) as u64)
    }
}
