use actix_web::{web, HttpResponse};

use crate::dto::auth::SessionsResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use sv_core::repositories::{RevocationRepository, SessionRepository};

use super::AppState;

/// Handler for GET /api/v1/auth/sessions
///
/// Lists the caller's unused, unexpired refresh sessions, newest first.
pub async fn list_sessions<S, R>(
    state: web::Data<AppState<S, R>>,
    auth: AuthenticatedUser,
) -> HttpResponse
where
    S: SessionRepository + 'static,
    R: RevocationRepository + 'static,
{
    match state.session_manager.list_active_sessions(auth.user_id).await {
        Ok(sessions) => HttpResponse::Ok().json(SessionsResponse::from_sessions(&sessions)),
        Err(error) => handle_domain_error(&error),
    }
}
