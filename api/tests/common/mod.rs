//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use sv_api::{AppState, AuthenticationGate};
use sv_core::{
    CredentialIssuer, InMemoryRevocationRepository, InMemorySessionRepository,
    InMemorySubjectDirectory, SessionManager, SubjectProfile,
};
use sv_shared::{AuthConfig, JwtConfig};
use uuid::Uuid;

pub const SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const EMAIL: &str = "ana@example.com";
pub const PASSWORD: &str = "correct-horse";

pub type TestManager = SessionManager<InMemorySessionRepository, InMemoryRevocationRepository>;

pub struct TestContext {
    pub manager: Arc<TestManager>,
    pub subjects: InMemorySubjectDirectory,
    pub auth_config: AuthConfig,
    pub user: SubjectProfile,
}

impl TestContext {
    pub async fn new() -> Self {
        let auth_config = AuthConfig {
            jwt: JwtConfig::new(SECRET),
            ..Default::default()
        };

        let subjects = InMemorySubjectDirectory::new();
        let user = SubjectProfile::new(Uuid::new_v4(), EMAIL, "Ana", true);
        subjects.upsert(user.clone(), PASSWORD).await;

        let issuer = CredentialIssuer::from_jwt_config(&auth_config.jwt).unwrap();
        let manager = Arc::new(SessionManager::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryRevocationRepository::new()),
            Arc::new(subjects.clone()),
            Arc::new(issuer),
        ));

        Self {
            manager,
            subjects,
            auth_config,
            user,
        }
    }

    pub fn gate(&self) -> AuthenticationGate {
        AuthenticationGate::new(self.manager.clone(), self.auth_config.clone())
    }

    pub fn state(
        &self,
    ) -> web::Data<AppState<InMemorySessionRepository, InMemoryRevocationRepository>> {
        web::Data::new(AppState::new(self.manager.clone()))
    }

    pub fn access_token(&self) -> String {
        self.manager
            .issuer()
            .issue_access(self.user.user_id, &self.user.email, &self.user.name, true)
            .unwrap()
    }
}
