//! Credential claims and the token pair handed back to clients.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value of the `type` claim carried by refresh credentials
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Token type reported to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Claims carried by an access credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Subject's email address
    pub email: String,

    /// Subject's display name
    pub name: String,

    /// Whether the subject's account is active
    pub active: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique credential ID
    pub jti: String,
}

impl AccessClaims {
    /// Creates access claims valid for `ttl` starting at `now`
    pub fn new(
        user_id: Uuid,
        email: impl Into<String>,
        name: impl Into<String>,
        active: bool,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            email: email.into(),
            name: name.into(),
            active,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Claims carried by a refresh credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Always `"refresh"`
    #[serde(rename = "type")]
    pub token_type: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique credential ID
    pub jti: String,
}

impl RefreshClaims {
    /// Creates refresh claims valid for `ttl` starting at `now`
    pub fn new(user_id: Uuid, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            token_type: REFRESH_TOKEN_TYPE.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Whether the `type` claim marks this as a refresh credential
    pub fn is_refresh(&self) -> bool {
        self.token_type == REFRESH_TOKEN_TYPE
    }
}

/// Token pair returned to the client on login and refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Signed access credential
    pub access_token: String,

    /// Always `"Bearer"`
    pub token_type: String,

    /// Signed refresh credential (also the session key)
    pub refresh_token: String,

    /// The user the pair was issued to
    pub subject_id: Uuid,
}

impl TokenPair {
    /// Creates a bearer token pair
    pub fn bearer(access_token: String, refresh_token: String, subject_id: Uuid) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            refresh_token,
            subject_id,
        }
    }
}

/// Short, non-reversible label for a credential, safe for logs and listings
///
/// Uses the tail of the signature segment, which differs for every credential.
pub fn token_fingerprint(token: &str) -> String {
    let tail_start = token
        .char_indices()
        .rev()
        .nth(7)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    format!("…{}", &token[tail_start..])
}
