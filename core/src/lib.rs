//! # Session Vault Core
//!
//! Domain layer of the credential lifecycle service: session and revocation
//! entities, repository interfaces, and the services that issue, rotate,
//! revoke and garbage-collect credentials.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    token_fingerprint, AccessClaims, ClientInfo, RefreshClaims, RevocationReason,
    RevokedCredential, Session, SubjectProfile, TokenPair,
};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{
    InMemoryRevocationRepository, InMemorySessionRepository, InMemorySubjectDirectory,
    RevocationRepository, SessionRepository, SubjectDirectory,
};
pub use services::{
    CredentialConfig, CredentialIssuer, Janitor, JanitorHandle, SessionManager, SweepReport,
};
