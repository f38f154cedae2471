//! In-memory implementation of RevocationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
#[cfg(test)]
use uuid::Uuid;

use crate::domain::entities::revocation::RevokedCredential;
use crate::errors::DomainError;

use super::r#trait::RevocationRepository;

#[derive(Clone)]
pub struct InMemoryRevocationRepository {
    revoked: Arc<RwLock<HashMap<String, RevokedCredential>>>,
}

impl InMemoryRevocationRepository {
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.revoked.read().await.is_empty()
    }

    /// Revocations recorded for a user, newest first
    #[cfg(test)]
    pub(crate) async fn find_by_user(&self, user_id: Uuid) -> Vec<RevokedCredential> {
        let entries = self.revoked.read().await;
        let mut found: Vec<RevokedCredential> = entries
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.revoked_at.cmp(&a.revoked_at));
        found
    }
}

impl Default for InMemoryRevocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRepository for InMemoryRevocationRepository {
    async fn insert(&self, revoked: RevokedCredential) -> Result<(), DomainError> {
        let mut entries = self.revoked.write().await;
        entries.entry(revoked.token.clone()).or_insert(revoked);
        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        let entries = self.revoked.read().await;
        Ok(entries.contains_key(token))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut entries = self.revoked.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        Ok((before - entries.len()) as u64)
    }
}
