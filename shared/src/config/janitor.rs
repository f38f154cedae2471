//! Schedule for the expired-record sweeps

use serde::{Deserialize, Serialize};

/// Janitor sweep configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JanitorConfig {
    /// Seconds between refresh-session sweeps
    pub session_interval_secs: u64,

    /// Seconds between revocation-list sweeps
    pub revocation_interval_secs: u64,

    /// Whether the sweeps are scheduled at all
    pub enabled: bool,
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            session_interval_secs: 6 * 60 * 60,
            revocation_interval_secs: 12 * 60 * 60,
            enabled: true,
        }
    }
}

impl JanitorConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            session_interval_secs: std::env::var("JANITOR_SESSION_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.session_interval_secs),
            revocation_interval_secs: std::env::var("JANITOR_REVOCATION_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.revocation_interval_secs),
            enabled: std::env::var("JANITOR_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
        }
    }
}
