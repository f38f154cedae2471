//! Credential issuer module
//!
//! Signs and verifies the compact HS256 credentials handed to clients:
//! short-lived access credentials and long-lived refresh credentials.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::CredentialConfig;
pub use service::CredentialIssuer;
