//! Unit tests for the credential issuer

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::{DomainError, TokenError};
use crate::services::credential::{CredentialConfig, CredentialIssuer};

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn issuer() -> CredentialIssuer {
    CredentialIssuer::new(CredentialConfig::new(
        SECRET,
        Duration::minutes(15),
        Duration::days(7),
    ))
    .unwrap()
}

fn sign_with(secret: &str, claims: &impl serde::Serialize) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

fn assert_invalid(result: Result<impl std::fmt::Debug, DomainError>) {
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidCredential))
    ));
}

#[test]
fn test_rejects_short_secret() {
    let result = CredentialIssuer::new(CredentialConfig::new(
        "too-short",
        Duration::minutes(15),
        Duration::days(7),
    ));
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_rejects_non_positive_lifetimes() {
    let config = CredentialConfig::new(SECRET, Duration::zero(), Duration::days(7));
    let result = CredentialIssuer::new(config);
    assert!(matches!(result, Err(DomainError::Configuration { .. })));

    let result = CredentialIssuer::new(CredentialConfig::new(
        SECRET,
        Duration::minutes(15),
        Duration::seconds(-1),
    ));
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_access_round_trip() {
    let issuer = issuer();
    let user_id = Uuid::new_v4();

    let token = issuer.issue_access(user_id, "a@x.com", "Ana", true).unwrap();
    let claims = issuer.verify(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.name, "Ana");
    assert!(claims.active);
    assert_eq!(claims.exp - claims.iat, 15 * 60);
}

#[test]
fn test_refresh_round_trip() {
    let issuer = issuer();
    let user_id = Uuid::new_v4();

    let token = issuer.issue_refresh(user_id).unwrap();
    let claims = issuer.verify_refresh(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.token_type, "refresh");
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[test]
fn test_same_second_credentials_differ() {
    let issuer = issuer();
    let user_id = Uuid::new_v4();

    let a = issuer.issue_refresh(user_id).unwrap();
    let b = issuer.issue_refresh(user_id).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_refresh_is_not_an_access_credential() {
    let issuer = issuer();
    let token = issuer.issue_refresh(Uuid::new_v4()).unwrap();
    assert_invalid(issuer.verify(&token));
}

#[test]
fn test_verify_refresh_checks_type_claim() {
    let issuer = issuer();
    let now = Utc::now();
    let mut claims = RefreshClaims::new(Uuid::new_v4(), now, Duration::days(7));
    claims.token_type = "access".to_string();

    let token = sign_with(SECRET, &claims);
    assert_invalid(issuer.verify_refresh(&token));
}

#[test]
fn test_rejects_tampered_and_foreign_credentials() {
    let issuer = issuer();
    let token = issuer.issue_access(Uuid::new_v4(), "a@x.com", "Ana", true).unwrap();

    let mut tampered = token.clone();
    tampered.push('x');
    assert_invalid(issuer.verify(&tampered));

    let claims = AccessClaims::new(
        Uuid::new_v4(),
        "a@x.com",
        "Ana",
        true,
        Utc::now(),
        Duration::minutes(15),
    );
    let foreign = sign_with("ffffffffffffffffffffffffffffffff", &claims);
    assert_invalid(issuer.verify(&foreign));

    assert_invalid(issuer.verify("not-a-jwt"));
    assert_invalid(issuer.verify(""));
}

#[test]
fn test_expired_credential_rejected() {
    let issuer = issuer();
    let claims = AccessClaims::new(
        Uuid::new_v4(),
        "a@x.com",
        "Ana",
        true,
        Utc::now() - Duration::minutes(20),
        Duration::minutes(15),
    );
    let token = sign_with(SECRET, &claims);

    assert_invalid(issuer.verify(&token));
    assert!(issuer.is_expired(&token));
}

#[test]
fn test_is_expired() {
    let issuer = issuer();
    let token = issuer.issue_access(Uuid::new_v4(), "a@x.com", "Ana", true).unwrap();

    assert!(!issuer.is_expired(&token));
    assert!(issuer.is_expired("garbage"));
}

#[test]
fn test_expires_at_reads_expired_credentials() {
    let issuer = issuer();
    let issued = Utc::now() - Duration::hours(1);
    let claims =
        AccessClaims::new(Uuid::new_v4(), "a@x.com", "Ana", true, issued, Duration::minutes(15));
    let token = sign_with(SECRET, &claims);

    assert_eq!(issuer.expires_at(&token).unwrap().timestamp(), claims.exp);
    assert!(issuer.expires_at("tok1").is_none());
}

#[test]
fn test_from_jwt_config() {
    let jwt = sv_shared::JwtConfig::new(SECRET.to_string());
    let issuer = CredentialIssuer::from_jwt_config(&jwt).unwrap();

    assert_eq!(issuer.access_ttl(), Duration::seconds(900));
    assert_eq!(issuer.refresh_ttl(), Duration::seconds(604_800));
}
