//! Application factory
//!
//! Builds the actix-web application: request tracing, the authentication gate
//! over `/api/v1`, the auth routes and the health check.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::middleware::auth::AuthenticationGate;
use crate::routes::auth::{
    login::login, logout::logout, logout_all::logout_all, me::me, refresh::refresh,
    sessions::list_sessions, AppState,
};

use sv_core::repositories::{RevocationRepository, SessionRepository};
use sv_infra::DatabasePool;
use sv_shared::{error_codes, ErrorResponse};

/// Create and configure the application with all dependencies
///
/// `database` is optional so the app can run over in-memory stores; when it is
/// absent `/health` reports only the process itself.
pub fn create_app<S, R>(
    app_state: web::Data<AppState<S, R>>,
    gate: AuthenticationGate,
    database: Option<web::Data<DatabasePool>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    S: SessionRepository + 'static,
    R: RevocationRepository + 'static,
{
    let mut app = App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler));

    if let Some(database) = database {
        app = app.app_data(database);
    }

    app.wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .wrap(gate)
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<S, R>))
                        .route("/refresh", web::post().to(refresh::<S, R>))
                        .route("/logout", web::post().to(logout::<S, R>))
                        .route("/logout-all", web::post().to(logout_all::<S, R>))
                        .route("/sessions", web::get().to(list_sessions::<S, R>))
                        .route("/me", web::get().to(me)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check(database: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let database_status = match database {
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            Ok(false) => "down",
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                "down"
            }
        },
        None => "not_configured",
    };

    let body = serde_json::json!({
        "status": if database_status == "down" { "degraded" } else { "healthy" },
        "service": "session-vault",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if database_status == "down" {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
