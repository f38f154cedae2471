//! Maps domain errors to HTTP responses.
//!
//! Every body is a shared [`ErrorResponse`]. Token errors keep their stable
//! codes; anything internal is logged and reported with a generic message.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use sv_core::errors::{DomainError, TokenError};
use sv_shared::{error_codes, ErrorResponse};
use tracing::{error, warn};
use validator::ValidationErrors;

/// Status code for a token error
pub fn token_error_status(error: &TokenError) -> StatusCode {
    match error {
        TokenError::SessionNotFound
        | TokenError::SessionExpired
        | TokenError::InvalidCredential
        | TokenError::ReuseDetected => StatusCode::UNAUTHORIZED,
        TokenError::AccountDisabled => StatusCode::FORBIDDEN,
        TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) => {
            let status = token_error_status(token_error);
            if status.is_server_error() {
                error!(error = %token_error, "Credential operation failed");
                return internal_error_response();
            }
            if matches!(token_error, TokenError::ReuseDetected) {
                warn!("Responding to refresh token reuse");
            }
            HttpResponse::build(status)
                .json(ErrorResponse::new(token_error.code(), token_error.to_string()))
        }
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())),
        DomainError::NotFound { .. }
        | DomainError::Internal { .. }
        | DomainError::Configuration { .. } => {
            error!(error = %error, "Request failed with internal error");
            internal_error_response()
        }
    }
}

/// 400 response listing every field that failed validation
pub fn handle_validation_error(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
            .add_detail("fields", fields),
    )
}

/// Replaces actix's plain-text body for malformed JSON payloads
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()));
    InternalError::from_response(err, response).into()
}

fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        error_codes::INTERNAL_ERROR,
        "An internal error occurred",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_token_errors_are_unauthorized_with_distinct_codes() {
        let cases = [
            (TokenError::SessionNotFound, "SESSION_NOT_FOUND"),
            (TokenError::SessionExpired, "SESSION_EXPIRED"),
            (TokenError::InvalidCredential, "TOKEN_INVALID"),
            (TokenError::ReuseDetected, "REFRESH_TOKEN_REUSED"),
        ];

        for (token_error, code) in cases {
            let response = handle_domain_error(&DomainError::Token(token_error));
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(body_json(response).await["error"], code);
        }
    }

    #[actix_web::test]
    async fn test_account_disabled_is_forbidden() {
        let response = handle_domain_error(&TokenError::AccountDisabled.into());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["error"], "ACCOUNT_DISABLED");
    }

    #[actix_web::test]
    async fn test_validation_is_bad_request() {
        let response = handle_domain_error(&DomainError::Validation {
            message: "bad".to_string(),
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_internal_errors_hide_details() {
        let error = DomainError::internal("connection refused to 10.0.0.5");
        let response = handle_domain_error(&error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.5"));
    }

    #[actix_web::test]
    async fn test_generation_failure_is_internal() {
        let response = handle_domain_error(&TokenError::TokenGenerationFailed.into());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
