//! Credential issuer implementation

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use sv_shared::JwtConfig;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::{DomainError, TokenError};

use super::config::CredentialConfig;

/// Only the expiry, for lenient decoding
#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    exp: i64,
}

/// Stateless signer/verifier for access and refresh credentials
///
/// The key is fixed for the lifetime of the issuer. Verification applies no
/// clock leeway: a credential is rejected from the second its `exp` is reached.
pub struct CredentialIssuer {
    config: CredentialConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Signature-only validation used to read `exp` from expired credentials
    lenient_validation: Validation,
}

impl CredentialIssuer {
    /// Creates a new issuer
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Configuration)` - Secret shorter than 32 bytes or a
    ///   non-positive lifetime
    pub fn new(config: CredentialConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        let mut lenient_validation = Validation::new(Algorithm::HS256);
        lenient_validation.leeway = 0;
        lenient_validation.validate_exp = false;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            lenient_validation,
        })
    }

    /// Creates an issuer from the shared JWT configuration
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        Self::new(CredentialConfig::from(jwt))
    }

    pub fn access_ttl(&self) -> Duration {
        self.config.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.config.refresh_ttl
    }

    /// Signs an access credential for the given subject
    pub fn issue_access(
        &self,
        user_id: Uuid,
        email: &str,
        name: &str,
        active: bool,
    ) -> Result<String, DomainError> {
        let claims = AccessClaims::new(
            user_id,
            email,
            name,
            active,
            Utc::now(),
            self.config.access_ttl,
        );
        self.sign(&claims)
    }

    /// Signs a refresh credential for the given subject
    pub fn issue_refresh(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = RefreshClaims::new(user_id, Utc::now(), self.config.refresh_ttl);
        self.sign(&claims)
    }

    /// Verifies signature, structure and expiry of an access credential
    pub fn verify(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let claims: AccessClaims = self.decode_strict(token)?;
        Ok(claims)
    }

    /// Verifies a refresh credential, including its `type` claim
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, DomainError> {
        let claims: RefreshClaims = self.decode_strict(token)?;
        if !claims.is_refresh() {
            debug!(token_type = %claims.token_type, "Credential is not a refresh credential");
            return Err(TokenError::InvalidCredential.into());
        }
        Ok(claims)
    }

    /// True once `exp` is reached, or when the token cannot be decoded at all
    pub fn is_expired(&self, token: &str) -> bool {
        match self.expires_at(token) {
            Some(expires_at) => expires_at <= Utc::now(),
            None => true,
        }
    }

    /// Reads the signed `exp` of a credential without checking elapsed time
    pub fn expires_at(&self, token: &str) -> Option<DateTime<Utc>> {
        let data = decode::<ExpiryClaim>(token, &self.decoding_key, &self.lenient_validation).ok()?;
        Utc.timestamp_opt(data.claims.exp, 0).single()
    }

    fn sign<T: serde::Serialize>(&self, claims: &T) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            debug!(error = %e, "Failed to sign credential");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    fn decode_strict<T>(&self, token: &str) -> Result<T, DomainError>
    where
        T: serde::de::DeserializeOwned + HasExpiry,
    {
        let data = decode::<T>(token, &self.decoding_key, &self.validation).map_err(|e| {
            debug!(kind = ?e.kind(), "Credential rejected");
            DomainError::Token(TokenError::InvalidCredential)
        })?;

        // jsonwebtoken still accepts a credential during its `exp` second
        if data.claims.exp() <= Utc::now().timestamp() {
            debug!("Credential rejected: expired");
            return Err(TokenError::InvalidCredential.into());
        }

        Ok(data.claims)
    }
}

trait HasExpiry {
    fn exp(&self) -> i64;
}

impl HasExpiry for AccessClaims {
    fn exp(&self) -> i64 {
        self.exp
    }
}

impl HasExpiry for RefreshClaims {
    fn exp(&self) -> i64 {
        self.exp
    }
}
