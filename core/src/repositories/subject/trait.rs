//! Read-only view of the external user directory.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::subject::SubjectProfile;
use crate::errors::DomainError;

/// Lookup of users for credential issuance
///
/// User management lives elsewhere. The session manager only needs to load a
/// profile by id when rotating, and to check a password on login.
#[async_trait]
pub trait SubjectDirectory: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<SubjectProfile>, DomainError>;

    /// Check an email/password pair
    ///
    /// # Returns
    /// * `Ok(Some(profile))` - The password matches (the account may still be inactive)
    /// * `Ok(None)` - Unknown email or wrong password
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<SubjectProfile>, DomainError>;
}
