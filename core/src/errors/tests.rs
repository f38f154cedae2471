//! Unit tests for domain error types

use super::*;
use sv_shared::errors::error_codes;

#[test]
fn test_token_error_converts_into_domain_error() {
    let err: DomainError = TokenError::ReuseDetected.into();
    assert!(matches!(err, DomainError::Token(TokenError::ReuseDetected)));
    assert_eq!(err.as_token_error(), Some(&TokenError::ReuseDetected));
    assert_eq!(err.to_string(), "Refresh token reuse detected");
}

#[test]
fn test_token_error_codes() {
    assert_eq!(TokenError::SessionNotFound.code(), error_codes::SESSION_NOT_FOUND);
    assert_eq!(TokenError::SessionExpired.code(), error_codes::SESSION_EXPIRED);
    assert_eq!(TokenError::InvalidCredential.code(), error_codes::TOKEN_INVALID);
    assert_eq!(TokenError::ReuseDetected.code(), error_codes::REFRESH_TOKEN_REUSED);
    assert_eq!(TokenError::AccountDisabled.code(), error_codes::ACCOUNT_DISABLED);
}

#[test]
fn test_helpers() {
    let err = DomainError::not_found("subject");
    assert_eq!(err.to_string(), "Resource not found: subject");
    assert!(err.as_token_error().is_none());

    let err = DomainError::internal("pool closed");
    assert_eq!(err.to_string(), "Internal error: pool closed");
}
