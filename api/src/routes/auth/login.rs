use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::LoginRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use sv_core::repositories::{RevocationRepository, SessionRepository};

use super::{client_info, AppState};

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "email": "ana@example.com", "password": "..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "tokenType": "Bearer",
///     "refreshToken": "eyJ...",
///     "subjectId": "6f1c..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed email or empty password
/// - 401 Unauthorized: Unknown email or wrong password
/// - 403 Forbidden: Account disabled
pub async fn login<S, R>(
    req: HttpRequest,
    state: web::Data<AppState<S, R>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password, &client)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_domain_error(&error),
    }
}
