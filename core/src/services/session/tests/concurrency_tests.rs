//! Concurrent rotation of a single refresh credential

use std::sync::Arc;

use super::fixture;
use crate::domain::entities::ClientInfo;
use crate::errors::{DomainError, TokenError};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_rotation_single_winner_usually_ends_with_no_session() {
    let f = fixture().await;
    let pair = f.manager.create_session(&f.user, &ClientInfo::default()).await.unwrap();
    let token = Arc::new(pair.refresh_token);

    let attempts = (0..8).map(|_| {
        let manager = Arc::clone(&f.manager);
        let token = Arc::clone(&token);
        tokio::spawn(async move { manager.rotate(&token, &ClientInfo::default()).await })
    });
    let results: Vec<_> = futures::future::join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(winners.len(), 1);
    let winner_refresh = winners[0].refresh_token.clone();

    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::ReuseDetected))
                | Err(DomainError::Token(TokenError::SessionNotFound))
        ));
    }

    // Losers' containment runs after the winner inserted its new session, so it
    // normally deletes that row too: the winner holds a refresh token with no
    // session behind it. One session survives only if every loser finished first.
    let active = f.manager.count_active_sessions(f.user.user_id).await.unwrap();
    assert!(active <= 1);

    let follow_up = f.manager.rotate(&winner_refresh, &ClientInfo::default()).await;
    if active == 0 {
        assert!(matches!(follow_up, Err(DomainError::Token(TokenError::SessionNotFound))));
    } else {
        assert!(follow_up.is_ok());
    }
}

#[tokio::test]
async fn test_sequential_replays_never_reopen_sessions() {
    let f = fixture().await;
    let pair = f.manager.create_session(&f.user, &ClientInfo::default()).await.unwrap();
    f.manager.rotate(&pair.refresh_token, &ClientInfo::default()).await.unwrap();

    for _ in 0..3 {
        assert!(f.manager.rotate(&pair.refresh_token, &ClientInfo::default()).await.is_err());
    }
    assert_eq!(f.manager.count_active_sessions(f.user.user_id).await.unwrap(), 0);
}
