//! Session manager implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::revocation::{RevocationReason, RevokedCredential};
use crate::domain::entities::session::Session;
use crate::domain::entities::subject::{ClientInfo, SubjectProfile};
use crate::domain::entities::token::{token_fingerprint, AccessClaims, TokenPair};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::{RevocationRepository, SessionRepository, SubjectDirectory};
use crate::services::credential::CredentialIssuer;

/// Orchestrates issuance, rotation, revocation and cleanup of credentials
///
/// The manager is the only writer of sessions and revocations. It holds no
/// mutable state of its own and is shared behind an `Arc`.
pub struct SessionManager<S: SessionRepository, R: RevocationRepository> {
    sessions: Arc<S>,
    revocations: Arc<R>,
    subjects: Arc<dyn SubjectDirectory>,
    issuer: Arc<CredentialIssuer>,
}

impl<S: SessionRepository, R: RevocationRepository> SessionManager<S, R> {
    pub fn new(
        sessions: Arc<S>,
        revocations: Arc<R>,
        subjects: Arc<dyn SubjectDirectory>,
        issuer: Arc<CredentialIssuer>,
    ) -> Self {
        Self {
            sessions,
            revocations,
            subjects,
            issuer,
        }
    }

    /// The issuer used to sign and verify credentials
    pub fn issuer(&self) -> &CredentialIssuer {
        &self.issuer
    }

    /// Verifies an access credential
    pub fn verify_access(&self, token: &str) -> DomainResult<AccessClaims> {
        self.issuer.verify(token)
    }

    /// Issues a token pair for the subject and persists the refresh session
    pub async fn create_session(
        &self,
        subject: &SubjectProfile,
        client: &ClientInfo,
    ) -> DomainResult<TokenPair> {
        let access_token = self.issuer.issue_access(
            subject.user_id,
            &subject.email,
            &subject.name,
            subject.active,
        )?;
        let refresh_token = self.issuer.issue_refresh(subject.user_id)?;

        let session = Session::new(
            refresh_token.clone(),
            subject.user_id,
            subject.email.clone(),
            client,
            Utc::now(),
            self.issuer.refresh_ttl(),
        );
        self.sessions.insert(session).await?;

        info!(
            user_id = %subject.user_id,
            client_ip = %client.ip,
            session = %token_fingerprint(&refresh_token),
            "Session created"
        );

        Ok(TokenPair::bearer(access_token, refresh_token, subject.user_id))
    }

    /// Exchanges a refresh credential for a new token pair
    ///
    /// The presented credential is consumed with a single conditional write.
    /// A credential that was already consumed signals theft: every session of
    /// the user is deleted and `ReuseDetected` is returned.
    ///
    /// # Errors
    ///
    /// * `SessionNotFound` - No session for this credential
    /// * `SessionExpired` - Session expired (the row is deleted)
    /// * `ReuseDetected` - Credential already consumed
    /// * `InvalidCredential` - Signature, expiry or `type` claim rejected
    /// * `AccountDisabled` - Subject is no longer active
    pub async fn rotate(
        &self,
        refresh_token: &str,
        client: &ClientInfo,
    ) -> DomainResult<TokenPair> {
        let fingerprint = token_fingerprint(refresh_token);

        let session = self
            .sessions
            .find_by_token(refresh_token)
            .await?
            .ok_or_else(|| {
                debug!(session = %fingerprint, "Refresh rejected: unknown session");
                DomainError::Token(TokenError::SessionNotFound)
            })?;

        let now = Utc::now();
        if session.is_expired_at(now) {
            self.sessions.delete(refresh_token).await?;
            info!(
                user_id = %session.user_id,
                session = %fingerprint,
                "Refresh rejected: session expired"
            );
            return Err(TokenError::SessionExpired.into());
        }

        if self.sessions.mark_used(refresh_token).await? == 0 {
            warn!(
                user_id = %session.user_id,
                session = %fingerprint,
                client_ip = %client.ip,
                "Refresh token reuse detected, revoking all sessions"
            );
            self.revoke_all_sessions(session.user_id, RevocationReason::ReuseDetected)
                .await?;
            return Err(TokenError::ReuseDetected.into());
        }

        let claims = self.issuer.verify_refresh(refresh_token)?;
        if claims.sub != session.user_id.to_string() {
            warn!(
                user_id = %session.user_id,
                session = %fingerprint,
                "Refresh credential subject mismatch"
            );
            return Err(TokenError::InvalidCredential.into());
        }

        self.sessions.record_last_used(refresh_token, now).await?;

        let subject = self
            .subjects
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("subject"))?;
        if !subject.active {
            info!(user_id = %subject.user_id, "Refresh rejected: account disabled");
            return Err(TokenError::AccountDisabled.into());
        }

        let pair = self.create_session(&subject, client).await?;
        info!(user_id = %subject.user_id, session = %fingerprint, "Session rotated");
        Ok(pair)
    }

    /// Adds an access credential to the revocation list
    ///
    /// The entry expires together with the credential. When the expiry cannot
    /// be read from the token, one access lifetime from now is used.
    pub async fn revoke(
        &self,
        access_token: &str,
        user_id: Uuid,
        email: &str,
        reason: RevocationReason,
        client_ip: &str,
    ) -> DomainResult<()> {
        let now = Utc::now();
        let expires_at = self
            .issuer
            .expires_at(access_token)
            .unwrap_or_else(|| now + self.issuer.access_ttl());

        let revoked = RevokedCredential::new(
            access_token,
            user_id,
            email,
            reason,
            client_ip,
            now,
            expires_at,
        );
        self.revocations.insert(revoked).await?;

        info!(
            user_id = %user_id,
            reason = %reason,
            credential = %token_fingerprint(access_token),
            "Access credential revoked"
        );
        Ok(())
    }

    pub async fn is_revoked(&self, token: &str) -> DomainResult<bool> {
        self.revocations.exists(token).await
    }

    /// Deletes every refresh session of a user
    pub async fn revoke_all_sessions(
        &self,
        user_id: Uuid,
        reason: RevocationReason,
    ) -> DomainResult<u64> {
        let removed = self.sessions.delete_by_user(user_id).await?;
        info!(user_id = %user_id, reason = %reason, removed, "All sessions revoked");
        Ok(removed)
    }

    /// Deletes a single refresh session. Returns whether it existed.
    pub async fn revoke_session(&self, refresh_token: &str) -> DomainResult<bool> {
        let removed = self.sessions.delete(refresh_token).await?;
        debug!(session = %token_fingerprint(refresh_token), removed, "Session revoked");
        Ok(removed)
    }

    /// Unused, unexpired sessions of a user
    pub async fn list_active_sessions(&self, user_id: Uuid) -> DomainResult<Vec<Session>> {
        self.sessions.find_active_by_user(user_id, Utc::now()).await
    }

    pub async fn count_active_sessions(&self, user_id: Uuid) -> DomainResult<u64> {
        self.sessions.count_active_by_user(user_id, Utc::now()).await
    }

    pub async fn cleanup_expired_sessions(&self) -> DomainResult<u64> {
        self.sessions.delete_expired(Utc::now()).await
    }

    pub async fn cleanup_expired_revocations(&self) -> DomainResult<u64> {
        self.revocations.delete_expired(Utc::now()).await
    }

    /// Removes expired sessions and revocations
    ///
    /// # Returns
    ///
    /// * `Ok((sessions_removed, revocations_removed))`
    pub async fn cleanup_expired(&self) -> DomainResult<(u64, u64)> {
        let sessions_removed = self.cleanup_expired_sessions().await?;
        let revocations_removed = self.cleanup_expired_revocations().await?;
        Ok((sessions_removed, revocations_removed))
    }

    /// Authenticates with email and password and opens a session
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        client: &ClientInfo,
    ) -> DomainResult<TokenPair> {
        let subject = match self.subjects.authenticate(email, password).await? {
            Some(subject) => subject,
            None => {
                info!(client_ip = %client.ip, "Login rejected: bad credentials");
                return Err(TokenError::InvalidCredential.into());
            }
        };

        if !subject.active {
            info!(user_id = %subject.user_id, "Login rejected: account disabled");
            return Err(TokenError::AccountDisabled.into());
        }

        self.create_session(&subject, client).await
    }
}
