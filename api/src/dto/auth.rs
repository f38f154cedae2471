use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sv_core::domain::entities::session::Session;
use sv_core::token_fingerprint;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[serde(rename = "refreshToken")]
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Optional logout body; the refresh session it names is closed as well
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutAllResponse {
    pub sessions_revoked: u64,
}

/// An active session as shown to its owner. The token itself is never echoed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub fingerprint: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub client_ip: String,
    pub client_agent: String,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            fingerprint: token_fingerprint(&session.token),
            issued_at: session.issued_at,
            expires_at: session.expires_at,
            last_used_at: session.last_used_at,
            client_ip: session.client_ip.clone(),
            client_agent: session.client_agent.clone(),
        }
    }
}

/// Identity the gate resolved for the request, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl IdentityResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user_id: None,
            email: None,
            roles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionSummary>,
    pub count: usize,
}

impl SessionsResponse {
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let sessions: Vec<SessionSummary> = sessions.iter().map(SessionSummary::from).collect();
        Self {
            count: sessions.len(),
            sessions,
        }
    }
}
