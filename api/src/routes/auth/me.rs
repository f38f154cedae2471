use actix_web::HttpResponse;

use crate::dto::auth::IdentityResponse;
use crate::middleware::auth::MaybeAuthenticated;

/// Handler for GET /api/v1/auth/me
///
/// Reports the identity bound by the authentication gate. A missing, revoked
/// or invalid credential is not an error here; the caller is reported as
/// anonymous.
///
/// ## Success (200 OK)
/// ```json
/// {
///     "authenticated": true,
///     "userId": "6f1c...",
///     "email": "ana@example.com",
///     "roles": ["USER"]
/// }
/// ```
pub async fn me(identity: MaybeAuthenticated) -> HttpResponse {
    let body = match identity.0 {
        Some(user) => IdentityResponse {
            authenticated: true,
            user_id: Some(user.user_id),
            email: Some(user.email),
            roles: user.roles,
        },
        None => IdentityResponse::anonymous(),
    };

    HttpResponse::Ok().json(body)
}
