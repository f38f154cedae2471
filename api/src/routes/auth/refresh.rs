use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::RefreshTokenRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use sv_core::repositories::{RevocationRepository, SessionRepository};

use super::{client_info, AppState};

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new token pair. The presented refresh token
/// is consumed; presenting it again revokes every session of the user.
///
/// # Request Body
///
/// ```json
/// { "refreshToken": "eyJ..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: `SESSION_NOT_FOUND`, `SESSION_EXPIRED`, `TOKEN_INVALID`
///   or `REFRESH_TOKEN_REUSED`
/// - 403 Forbidden: Account disabled
pub async fn refresh<S, R>(
    req: HttpRequest,
    state: web::Data<AppState<S, R>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    S: SessionRepository + 'static,
    R: RevocationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    let client = client_info(&req);
    match state
        .session_manager
        .rotate(&request.refresh_token, &client)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_domain_error(&error),
    }
}
