//! Revocation repository trait for explicitly revoked access credentials.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::revocation::RevokedCredential;
use crate::errors::DomainError;

/// Repository trait for the revocation list
///
/// Checked on every authenticated request, so `exists` should be a point
/// lookup on the token.
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Record a revoked credential
    ///
    /// Inserting a token that is already present keeps the existing row and
    /// succeeds.
    async fn insert(&self, revoked: RevokedCredential) -> Result<(), DomainError>;

    /// Whether the token is on the revocation list
    async fn exists(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete entries with `expires_at <= now`, returning how many were removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
