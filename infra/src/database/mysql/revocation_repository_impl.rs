//! MySQL implementation of the RevocationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sv_core::domain::entities::revocation::RevokedCredential;
use sv_core::errors::DomainError;
use sv_core::repositories::RevocationRepository;

/// MySQL implementation of RevocationRepository
pub struct MySqlRevocationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRevocationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn insert(&self, revoked: RevokedCredential) -> Result<(), DomainError> {
        // an existing row for the same token is kept as-is
        let query = r#"
            INSERT INTO revoked_credentials (
                token, user_id, email, revoked_at, reason, ip_address, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE token = token
        "#;

        sqlx::query(query)
            .bind(&revoked.token)
            .bind(revoked.user_id.to_string())
            .bind(&revoked.email)
            .bind(revoked.revoked_at)
            .bind(revoked.reason.as_str())
            .bind(&revoked.client_ip)
            .bind(revoked.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to revoke credential: {}", e)))?;

        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS revoked FROM revoked_credentials WHERE token = ?")
            .bind(token)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to check revocation: {}", e)))?;

        let revoked: i64 = row
            .try_get("revoked")
            .map_err(|e| DomainError::internal(format!("Failed to get revocation flag: {}", e)))?;

        Ok(revoked > 0)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM revoked_credentials WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::internal(format!("Failed to delete expired revocations: {}", e))
            })?;

        Ok(result.rows_affected())
    }

}
