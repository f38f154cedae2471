use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::LogoutAllResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use sv_core::domain::entities::revocation::RevocationReason;
use sv_core::repositories::{RevocationRepository, SessionRepository};

use super::{client_info, AppState};

/// Handler for POST /api/v1/auth/logout-all
///
/// Deletes every refresh session of the caller and revokes the presented
/// access credential.
///
/// ## Success (200 OK)
/// ```json
/// { "sessionsRevoked": 3 }
/// ```
pub async fn logout_all<S, R>(
    req: HttpRequest,
    state: web::Data<AppState<S, R>>,
    auth: AuthenticatedUser,
) -> HttpResponse
where
    S: SessionRepository + 'static,
    R: RevocationRepository + 'static,
{
    let client = client_info(&req);
    let manager = &state.session_manager;

    let sessions_revoked = match manager
        .revoke_all_sessions(auth.user_id, RevocationReason::Security)
        .await
    {
        Ok(count) => count,
        Err(error) => return handle_domain_error(&error),
    };

    if let Err(error) = manager
        .revoke(
            &auth.credential,
            auth.user_id,
            &auth.email,
            RevocationReason::Security,
            &client.ip,
        )
        .await
    {
        return handle_domain_error(&error);
    }

    HttpResponse::Ok().json(LogoutAllResponse { sessions_revoked })
}
