//! Session repository trait defining the interface for refresh session persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Repository trait for refresh sessions
///
/// Sessions are keyed by the refresh credential string. The only mutation a
/// stored session sees is `mark_used`, which must be a single conditional
/// write so that concurrent rotations of the same credential cannot both win.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - A session with the same token already exists
    async fn insert(&self, session: Session) -> Result<(), DomainError>;

    /// Find a session by its refresh credential
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError>;

    /// Atomically flip `used` from `false` to `true`
    ///
    /// # Returns
    /// * `Ok(1)` - This caller consumed the session
    /// * `Ok(0)` - The session was already used or does not exist
    async fn mark_used(&self, token: &str) -> Result<u64, DomainError>;

    /// Record when the session was last presented
    async fn record_last_used(&self, token: &str, at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Delete one session. Returns whether a row was removed.
    async fn delete(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete every session of a user, returning how many were removed
    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError>;

    /// Unused sessions of a user that have not expired at `now`
    async fn find_active_by_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Session>, DomainError>;

    /// Delete sessions with `expires_at <= now`, returning how many were removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Count active sessions for a user
    async fn count_active_by_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let sessions = self.find_active_by_user(user_id, now).await?;
        Ok(sessions.len() as u64)
    }
}
