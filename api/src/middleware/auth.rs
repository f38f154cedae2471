//! Authentication gate for API requests.
//!
//! The gate reads the bearer credential from the configured header, checks the
//! revocation list, verifies the credential and, on success, binds an
//! [`AuthenticatedUser`] to the request extensions. It never rejects a request
//! itself: a missing, revoked or invalid credential, or a failing revocation
//! store, simply leaves the request without identity. Handlers decide through
//! the [`AuthenticatedUser`] (required) and [`MaybeAuthenticated`] (optional)
//! extractors.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use sv_core::{
    domain::entities::token::{token_fingerprint, AccessClaims},
    errors::{DomainError, TokenError},
    repositories::{RevocationRepository, SessionRepository},
    services::SessionManager,
};
use sv_shared::{error_codes, AuthConfig, ErrorResponse};
use tracing::{debug, warn};
use uuid::Uuid;

/// Role granted to every authenticated caller
pub const DEFAULT_ROLE: &str = "USER";

/// Identity bound to a request whose credential passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Subject of the credential
    pub user_id: Uuid,
    /// Email carried in the credential
    pub email: String,
    /// Granted roles
    pub roles: Vec<String>,
    /// The raw access credential, needed to revoke it on logout
    pub credential: String,
}

impl AuthenticatedUser {
    /// Builds the identity from verified access claims
    pub fn from_claims(claims: AccessClaims, credential: String) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidCredential))?;
        Ok(Self {
            user_id,
            email: claims.email,
            roles: vec![DEFAULT_ROLE.to_string()],
            credential,
        })
    }
}

/// What the gate needs from the session layer
#[async_trait]
pub trait CredentialGuard: Send + Sync {
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError>;

    fn verify(&self, token: &str) -> Result<AccessClaims, DomainError>;
}

#[async_trait]
impl<S, R> CredentialGuard for SessionManager<S, R>
where
    S: SessionRepository + 'static,
    R: RevocationRepository + 'static,
{
    async fn is_revoked(&self, token: &str) -> Result<bool, DomainError> {
        SessionManager::is_revoked(self, token).await
    }

    fn verify(&self, token: &str) -> Result<AccessClaims, DomainError> {
        self.verify_access(token)
    }
}

/// Authentication gate middleware factory
#[derive(Clone)]
pub struct AuthenticationGate {
    guard: Arc<dyn CredentialGuard>,
    config: Rc<AuthConfig>,
}

impl AuthenticationGate {
    pub fn new(guard: Arc<dyn CredentialGuard>, config: AuthConfig) -> Self {
        Self {
            guard,
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthenticationGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationGateMiddleware {
            service: Rc::new(service),
            guard: Arc::clone(&self.guard),
            config: Rc::clone(&self.config),
        }))
    }
}

/// Authentication gate middleware service
pub struct AuthenticationGateMiddleware<S> {
    service: Rc<S>,
    guard: Arc<dyn CredentialGuard>,
    config: Rc<AuthConfig>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let guard = Arc::clone(&self.guard);
        let config = Rc::clone(&self.config);

        Box::pin(async move {
            if !config.is_public_path(req.path()) {
                if let Some(token) = extract_bearer_token(
                    &req,
                    &config.jwt.header_name,
                    &config.jwt.header_prefix,
                ) {
                    if let Some(user) = authenticate(guard.as_ref(), token).await {
                        req.extensions_mut().insert(user);
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// Resolves a credential to an identity; every failure yields `None`
async fn authenticate(guard: &dyn CredentialGuard, token: String) -> Option<AuthenticatedUser> {
    let fingerprint = token_fingerprint(&token);

    match guard.is_revoked(&token).await {
        Ok(false) => {}
        Ok(true) => {
            debug!(credential = %fingerprint, "Revoked credential presented");
            return None;
        }
        Err(e) => {
            warn!(error = %e, credential = %fingerprint, "Revocation check failed");
            return None;
        }
    }

    let claims = match guard.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, credential = %fingerprint, "Credential verification failed");
            return None;
        }
    };

    AuthenticatedUser::from_claims(claims, token).ok()
}

/// Extracts the credential following `prefix` in header `name`
pub fn extract_bearer_token(req: &ServiceRequest, name: &str, prefix: &str) -> Option<String> {
    req.headers()
        .get(name)?
        .to_str()
        .ok()?
        .strip_prefix(prefix)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Extractor for required authentication
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(unauthorized);

        ready(result)
    }
}

fn unauthorized() -> Error {
    let body = ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required");
    InternalError::from_response("Authentication required", HttpResponse::Unauthorized().json(body))
        .into()
}

/// Extractor for optional authentication
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl FromRequest for MaybeAuthenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(MaybeAuthenticated(user)))
    }
}
