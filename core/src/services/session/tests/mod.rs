mod concurrency_tests;

use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::SubjectProfile;
use crate::repositories::{
    InMemoryRevocationRepository, InMemorySessionRepository, InMemorySubjectDirectory,
};
use crate::services::credential::{CredentialConfig, CredentialIssuer};
use crate::services::session::SessionManager;

pub(super) const SECRET: &str = "0123456789abcdef0123456789abcdef";

pub(super) type TestManager =
    SessionManager<InMemorySessionRepository, InMemoryRevocationRepository>;

pub(super) struct Fixture {
    pub manager: Arc<TestManager>,
    pub sessions: Arc<InMemorySessionRepository>,
    pub revocations: Arc<InMemoryRevocationRepository>,
    pub subjects: Arc<InMemorySubjectDirectory>,
    pub user: SubjectProfile,
}

pub(super) async fn fixture() -> Fixture {
    let sessions = Arc::new(InMemorySessionRepository::new());
    let revocations = Arc::new(InMemoryRevocationRepository::new());
    let subjects = Arc::new(InMemorySubjectDirectory::new());
    let issuer = Arc::new(
        CredentialIssuer::new(CredentialConfig::new(
            SECRET,
            Duration::minutes(15),
            Duration::days(7),
        ))
        .unwrap(),
    );

    let user = SubjectProfile::new(Uuid::new_v4(), "u1@x.com", "User One", true);
    subjects.upsert(user.clone(), "password").await;

    let manager = Arc::new(SessionManager::new(
        Arc::clone(&sessions),
        Arc::clone(&revocations),
        subjects.clone(),
        issuer,
    ));

    Fixture {
        manager,
        sessions,
        revocations,
        subjects,
        user,
    }
}
