use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::LogoutRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use sv_core::domain::entities::revocation::RevocationReason;
use sv_core::errors::DomainError;
use sv_core::repositories::{RevocationRepository, SessionRepository};
use sv_core::services::SessionManager;
use uuid::Uuid;

use super::{client_info, AppState};

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented access credential. When the body names a refresh
/// token, that session is closed too.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Request Body (optional)
///
/// ```json
/// { "refreshToken": "eyJ..." }
/// ```
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or already revoked access token
pub async fn logout<S, R>(
    req: HttpRequest,
    state: web::Data<AppState<S, R>>,
    auth: AuthenticatedUser,
    body: Option<web::Json<LogoutRequest>>,
) -> HttpResponse
where
    S: SessionRepository + 'static,
    R: RevocationRepository + 'static,
{
    let client = client_info(&req);
    let manager = &state.session_manager;

    if let Err(error) = manager
        .revoke(
            &auth.credential,
            auth.user_id,
            &auth.email,
            RevocationReason::Logout,
            &client.ip,
        )
        .await
    {
        return handle_domain_error(&error);
    }

    let refresh_token = body.and_then(|b| b.into_inner().refresh_token);
    if let Some(refresh_token) = refresh_token.filter(|t| !t.is_empty()) {
        if let Err(error) = close_own_session(manager, auth.user_id, &refresh_token).await {
            return handle_domain_error(&error);
        }
    }

    HttpResponse::NoContent().finish()
}

/// Deletes the session only when it belongs to the caller
async fn close_own_session<S, R>(
    manager: &SessionManager<S, R>,
    user_id: Uuid,
    refresh_token: &str,
) -> Result<(), DomainError>
where
    S: SessionRepository + 'static,
    R: RevocationRepository + 'static,
{
    let owned = manager
        .list_active_sessions(user_id)
        .await?
        .iter()
        .any(|session| session.token == refresh_token);
    if owned {
        manager.revoke_session(refresh_token).await?;
    }
    Ok(())
}
