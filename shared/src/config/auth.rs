//! Credential signing and header configuration

use serde::{Deserialize, Serialize};

/// Minimum HS256 secret length (256 bits)
pub const MIN_SECRET_BYTES: usize = 32;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used for both signing and verification
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Header carrying the credential
    #[serde(default = "default_header_name")]
    pub header_name: String,

    /// Prefix in front of the credential inside the header
    #[serde(default = "default_header_prefix")]
    pub header_prefix: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
            header_name: default_header_name(),
            header_prefix: default_header_prefix(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Path prefixes the authentication gate skips entirely
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            public_paths: default_public_paths(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry: std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
            header_name: std::env::var("JWT_HEADER_NAME").unwrap_or(defaults.header_name),
            header_prefix: std::env::var("JWT_HEADER_PREFIX").unwrap_or(defaults.header_prefix),
        };

        let public_paths = std::env::var("AUTH_PUBLIC_PATHS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_else(|_| default_public_paths());

        Self { jwt, public_paths }
    }

    /// Whether the gate should skip the given request path
    pub fn is_public_path(&self, path: &str) -> bool {
        self.public_paths.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

fn default_header_name() -> String {
    String::from("Authorization")
}

fn default_header_prefix() -> String {
    String::from("Bearer ")
}

fn default_public_paths() -> Vec<String> {
    vec![
        String::from("/health"),
        String::from("/api/v1/auth/login"),
        String::from("/api/v1/auth/refresh"),
    ]
}
