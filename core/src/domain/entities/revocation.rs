//! Revoked access credential entity.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why an access credential was revoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevocationReason {
    Logout,
    ReuseDetected,
    Security,
}

impl RevocationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevocationReason::Logout => "logout",
            RevocationReason::ReuseDetected => "reuse_detected",
            RevocationReason::Security => "security",
        }
    }
}

impl fmt::Display for RevocationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevocationReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logout" => Ok(RevocationReason::Logout),
            "reuse_detected" => Ok(RevocationReason::ReuseDetected),
            "security" => Ok(RevocationReason::Security),
            other => Err(format!("Unknown revocation reason: {}", other)),
        }
    }
}

/// An access credential that must no longer be honoured
///
/// Kept until `expires_at`, the credential's own expiry, after which the
/// signature check rejects it anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedCredential {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub reason: RevocationReason,
    pub client_ip: String,
    pub revoked_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RevokedCredential {
    pub fn new(
        token: impl Into<String>,
        user_id: Uuid,
        email: impl Into<String>,
        reason: RevocationReason,
        client_ip: impl Into<String>,
        revoked_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token: token.into(),
            user_id,
            email: email.into(),
            reason,
            client_ip: client_ip.into(),
            revoked_at,
            expires_at,
        }
    }

    /// Eligible for garbage collection once `now` reaches `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
