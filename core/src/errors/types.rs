//! Error types for credential and session operations
//!
//! Messages stay generic on purpose; the HTTP layer maps each variant to a
//! stable error code from `sv_shared::errors::error_codes`.

use sv_shared::errors::error_codes;
use thiserror::Error;

/// Credential and session lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Refresh session not found")]
    SessionNotFound,

    #[error("Refresh session expired")]
    SessionExpired,

    #[error("Invalid credential")]
    InvalidCredential,

    #[error("Refresh token reuse detected")]
    ReuseDetected,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Stable error code reported to clients
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::SessionNotFound => error_codes::SESSION_NOT_FOUND,
            TokenError::SessionExpired => error_codes::SESSION_EXPIRED,
            TokenError::InvalidCredential => error_codes::TOKEN_INVALID,
            TokenError::ReuseDetected => error_codes::REFRESH_TOKEN_REUSED,
            TokenError::AccountDisabled => error_codes::ACCOUNT_DISABLED,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
        }
    }
}
