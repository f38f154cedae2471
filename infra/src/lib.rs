//! # Infrastructure Layer
//!
//! MySQL implementations of the Session Vault repositories:
//!
//! - **Database**: connection pool, health check and schema bootstrap
//! - **Sessions**: refresh session store with conditional `used` update
//! - **Revocations**: revoked access credential list
//! - **Users**: read-only user directory with bcrypt password checks

pub mod database;

pub use database::{
    DatabasePool, MySqlRevocationRepository, MySqlSessionRepository, MySqlSubjectDirectory,
    PoolStatistics,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
