//! Unit tests for the in-memory subject directory

use uuid::Uuid;

use crate::domain::entities::SubjectProfile;
use crate::repositories::subject::{InMemorySubjectDirectory, SubjectDirectory};

#[tokio::test]
async fn test_find_by_id() {
    let directory = InMemorySubjectDirectory::new();
    let profile = SubjectProfile::new(Uuid::new_v4(), "a@x.com", "Ana", true);
    directory.upsert(profile.clone(), "secret").await;

    assert_eq!(directory.find_by_id(profile.user_id).await.unwrap(), Some(profile));
    assert!(directory.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_authenticate() {
    let directory = InMemorySubjectDirectory::new();
    let profile = SubjectProfile::new(Uuid::new_v4(), "a@x.com", "Ana", true);
    directory.upsert(profile.clone(), "secret").await;

    assert_eq!(
        directory.authenticate("A@X.com", "secret").await.unwrap(),
        Some(profile)
    );
    assert!(directory.authenticate("a@x.com", "wrong").await.unwrap().is_none());
    assert!(directory.authenticate("b@x.com", "secret").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_active_and_remove() {
    let directory = InMemorySubjectDirectory::new();
    let profile = SubjectProfile::new(Uuid::new_v4(), "a@x.com", "Ana", true);
    directory.upsert(profile.clone(), "secret").await;

    assert!(directory.set_active(profile.user_id, false).await);
    assert!(!directory.find_by_id(profile.user_id).await.unwrap().unwrap().active);

    assert!(directory.remove(profile.user_id).await);
    assert!(!directory.set_active(profile.user_id, true).await);
}
