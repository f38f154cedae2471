//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Session, revocation and user directory repositories
//! - Schema bootstrap from `migrations/`

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlRevocationRepository, MySqlSessionRepository, MySqlSubjectDirectory};
