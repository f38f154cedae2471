//! Configuration module with business-specific sub-modules
//!
//! - `auth` - credential signing and header configuration
//! - `database` - database connection and pool configuration
//! - `environment` - environment detection and logging configuration
//! - `janitor` - expired-record sweep intervals
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod janitor;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use janitor::JanitorConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Expired-record sweeps
    #[serde(default)]
    pub janitor: JanitorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            janitor: JanitorConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            janitor: JanitorConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Checks that the configuration is usable for the current environment
    ///
    /// Production deployments must not run with the built-in development secret.
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.auth.jwt.secret.len() < auth::MIN_SECRET_BYTES {
            return Err(format!(
                "JWT secret must be at least {} bytes",
                auth::MIN_SECRET_BYTES
            ));
        }
        Ok(())
    }
}
