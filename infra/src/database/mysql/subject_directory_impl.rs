//! MySQL-backed user directory.
//!
//! Reads the `users` table owned by the user management service. Expected
//! columns: `id CHAR(36)`, `email`, `name`, `password_hash` (bcrypt) and
//! `is_active`.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sv_core::domain::entities::subject::SubjectProfile;
use sv_core::errors::DomainError;
use sv_core::repositories::SubjectDirectory;

/// MySQL implementation of SubjectDirectory
pub struct MySqlSubjectDirectory {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSubjectDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<SubjectProfile, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;

        Ok(SubjectProfile {
            user_id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            active: row
                .try_get("is_active")
                .map_err(|e| DomainError::internal(format!("Failed to get is_active: {}", e)))?,
        })
    }
}

#[async_trait]
impl SubjectDirectory for MySqlSubjectDirectory {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<SubjectProfile>, DomainError> {
        let query = "SELECT id, email, name, is_active FROM users WHERE id = ? LIMIT 1";
        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user: {}", e)))?;

        result.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<SubjectProfile>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, name, is_active, password_hash FROM users WHERE email = ? LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to find user: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let hash: String = row
            .try_get("password_hash")
            .map_err(|e| DomainError::internal(format!("Failed to get password_hash: {}", e)))?;
        let password = password.to_owned();

        // bcrypt is CPU-bound
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password check aborted: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Invalid password hash: {}", e)))?;

        if !matches {
            return Ok(None);
        }

        Self::row_to_profile(&row).map(Some)
    }
}
