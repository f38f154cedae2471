//! Subject and client descriptions supplied by callers of the session manager.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder stored when the client address or agent is not known
pub const UNKNOWN_CLIENT: &str = "unknown";

/// What credential issuance needs to know about a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectProfile {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub active: bool,
}

impl SubjectProfile {
    pub fn new(
        user_id: Uuid,
        email: impl Into<String>,
        name: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            name: name.into(),
            active,
        }
    }
}

/// Network details of the calling client, recorded on each session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub ip: String,
    pub agent: String,
}

impl ClientInfo {
    /// Empty values are replaced by `"unknown"`
    pub fn new(ip: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            ip: or_unknown(ip.into()),
            agent: or_unknown(agent.into()),
        }
    }

    /// Builds client info from optional header values
    pub fn from_parts(ip: Option<&str>, agent: Option<&str>) -> Self {
        Self::new(ip.unwrap_or_default(), agent.unwrap_or_default())
    }
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            ip: UNKNOWN_CLIENT.to_string(),
            agent: UNKNOWN_CLIENT.to_string(),
        }
    }
}

fn or_unknown(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN_CLIENT.to_string()
    } else {
        trimmed.to_string()
    }
}
