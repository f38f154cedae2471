//! Shared configuration and response types for the Session Vault server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (auth, database, janitor, server, environment)
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JanitorConfig, JwtConfig,
    LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
