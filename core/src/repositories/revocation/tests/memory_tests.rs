//! Unit tests for the in-memory revocation repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{RevocationReason, RevokedCredential};
use crate::repositories::revocation::{InMemoryRevocationRepository, RevocationRepository};

fn revoked(
    token: &str,
    user_id: Uuid,
    reason: RevocationReason,
    ttl: Duration,
) -> RevokedCredential {
    let now = Utc::now();
    RevokedCredential::new(token, user_id, "a@x.com", reason, "unknown", now, now + ttl)
}

#[tokio::test]
async fn test_insert_and_exists() {
    let repo = InMemoryRevocationRepository::new();
    let user_id = Uuid::new_v4();

    assert!(!repo.exists("tok1").await.unwrap());
    repo.insert(revoked("tok1", user_id, RevocationReason::Logout, Duration::minutes(15)))
        .await
        .unwrap();
    assert!(repo.exists("tok1").await.unwrap());
}

#[tokio::test]
async fn test_insert_is_idempotent() {
    let repo = InMemoryRevocationRepository::new();
    let user_id = Uuid::new_v4();

    repo.insert(revoked("tok1", user_id, RevocationReason::Logout, Duration::minutes(15)))
        .await
        .unwrap();
    repo.insert(revoked("tok1", user_id, RevocationReason::Security, Duration::minutes(15)))
        .await
        .unwrap();

    assert_eq!(repo.len().await, 1);
    let entries = repo.find_by_user(user_id).await;
    assert_eq!(entries[0].reason, RevocationReason::Logout);
}

#[tokio::test]
async fn test_delete_expired() {
    let repo = InMemoryRevocationRepository::new();
    let user_id = Uuid::new_v4();

    repo.insert(revoked("old", user_id, RevocationReason::Logout, Duration::seconds(-1)))
        .await
        .unwrap();
    repo.insert(revoked("new", user_id, RevocationReason::Logout, Duration::minutes(15)))
        .await
        .unwrap();

    assert_eq!(repo.delete_expired(Utc::now()).await.unwrap(), 1);
    assert!(!repo.exists("old").await.unwrap());
    assert!(repo.exists("new").await.unwrap());
}

#[tokio::test]
async fn test_find_by_user_filters_other_users() {
    let repo = InMemoryRevocationRepository::new();
    let user_id = Uuid::new_v4();

    repo.insert(revoked("a", user_id, RevocationReason::Logout, Duration::minutes(15)))
        .await
        .unwrap();
    repo.insert(revoked("b", Uuid::new_v4(), RevocationReason::Logout, Duration::minutes(15)))
        .await
        .unwrap();

    let entries = repo.find_by_user(user_id).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].token, "a");
}
