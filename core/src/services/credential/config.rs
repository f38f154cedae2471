//! Configuration for the credential issuer

use chrono::Duration;
use sv_shared::config::auth::MIN_SECRET_BYTES;
use sv_shared::JwtConfig;

use crate::errors::DomainError;

/// Signing key and lifetimes for issued credentials
#[derive(Debug, Clone)]
pub struct CredentialConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Access credential lifetime
    pub access_ttl: Duration,
    /// Refresh credential (and session) lifetime
    pub refresh_ttl: Duration,
}

impl CredentialConfig {
    pub fn new(secret: impl Into<String>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Reject keys shorter than 256 bits and non-positive lifetimes
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.secret.len() < MIN_SECRET_BYTES {
            return Err(DomainError::Configuration {
                message: format!(
                    "signing secret must be at least {} bytes, got {}",
                    MIN_SECRET_BYTES,
                    self.secret.len()
                ),
            });
        }
        if self.access_ttl <= Duration::zero() {
            return Err(DomainError::Configuration {
                message: "access credential lifetime must be positive".to_string(),
            });
        }
        if self.refresh_ttl <= Duration::zero() {
            return Err(DomainError::Configuration {
                message: "refresh credential lifetime must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl From<&JwtConfig> for CredentialConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            access_ttl: Duration::seconds(jwt.access_token_expiry),
            refresh_ttl: Duration::seconds(jwt.refresh_token_expiry),
        }
    }
}
