//! Refresh session entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::subject::ClientInfo;

/// A persisted refresh session, keyed by the refresh credential itself
///
/// `used` only ever moves from `false` to `true`. A used row is the terminal
/// link of a rotation chain; presenting it again is treated as reuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The refresh credential (primary key)
    pub token: String,

    /// Owner of the session
    pub user_id: Uuid,

    /// Owner's email at issuance time
    pub email: String,

    /// When the session was created
    pub issued_at: DateTime<Utc>,

    /// When the refresh credential stops being accepted
    pub expires_at: DateTime<Utc>,

    /// Client IP recorded at issuance
    pub client_ip: String,

    /// Client user agent recorded at issuance
    pub client_agent: String,

    /// Whether the credential has been consumed by a rotation
    pub used: bool,

    /// Last time the credential was presented for rotation
    pub last_used_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates an unused session valid for `ttl` from `now`
    pub fn new(
        token: String,
        user_id: Uuid,
        email: impl Into<String>,
        client: &ClientInfo,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            token,
            user_id,
            email: email.into(),
            issued_at: now,
            expires_at: now + ttl,
            client_ip: client.ip.clone(),
            client_agent: client.agent.clone(),
            used: false,
            last_used_at: None,
        }
    }

    /// Expired once `now` reaches `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Unused and not yet expired
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.used && !self.is_expired_at(now)
    }

    /// Marks the session consumed. Returns `false` if it already was.
    pub fn mark_used(&mut self) -> bool {
        if self.used {
            return false;
        }
        self.used = true;
        true
    }
}
