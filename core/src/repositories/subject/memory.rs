//! In-memory implementation of SubjectDirectory

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::subject::SubjectProfile;
use crate::errors::DomainError;

use super::r#trait::SubjectDirectory;

struct Entry {
    profile: SubjectProfile,
    password: String,
}

/// Fixed set of users held in memory, with plain-text passwords
#[derive(Clone, Default)]
pub struct InMemorySubjectDirectory {
    subjects: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

impl InMemorySubjectDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user
    pub async fn upsert(&self, profile: SubjectProfile, password: impl Into<String>) {
        let mut subjects = self.subjects.write().await;
        subjects.insert(
            profile.user_id,
            Entry {
                profile,
                password: password.into(),
            },
        );
    }

    /// Flip a user's active flag. Returns `false` if the user is unknown.
    pub async fn set_active(&self, user_id: Uuid, active: bool) -> bool {
        let mut subjects = self.subjects.write().await;
        match subjects.get_mut(&user_id) {
            Some(entry) => {
                entry.profile.active = active;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, user_id: Uuid) -> bool {
        self.subjects.write().await.remove(&user_id).is_some()
    }
}

#[async_trait]
impl SubjectDirectory for InMemorySubjectDirectory {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<SubjectProfile>, DomainError> {
        let subjects = self.subjects.read().await;
        Ok(subjects.get(&user_id).map(|entry| entry.profile.clone()))
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<SubjectProfile>, DomainError> {
        let subjects = self.subjects.read().await;
        Ok(subjects
            .values()
            .find(|entry| entry.profile.email.eq_ignore_ascii_case(email))
            .filter(|entry| entry.password == password)
            .map(|entry| entry.profile.clone()))
    }
}
