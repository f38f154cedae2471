use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{anyhow, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sv_api::{create_app, AppState, AuthenticationGate};
use sv_core::services::{CredentialIssuer, Janitor, SessionManager};
use sv_infra::{
    DatabasePool, MySqlRevocationRepository, MySqlSessionRepository, MySqlSubjectDirectory,
};
use sv_shared::config::LogFormat;
use sv_shared::{AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config.validate().map_err(|e| anyhow!(e))?;

    info!(environment = ?config.environment, "Starting Session Vault API server");

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to database")?;
    database
        .run_migrations()
        .await
        .context("failed to apply schema")?;

    let pool = database.get_pool().clone();
    let sessions = Arc::new(MySqlSessionRepository::new(pool.clone()));
    let revocations = Arc::new(MySqlRevocationRepository::new(pool.clone()));
    let subjects = Arc::new(MySqlSubjectDirectory::new(pool));

    let issuer = Arc::new(CredentialIssuer::from_jwt_config(&config.auth.jwt)?);
    let session_manager = Arc::new(SessionManager::new(sessions, revocations, subjects, issuer));

    let janitor = Arc::new(Janitor::new(
        Arc::clone(&session_manager),
        config.janitor.clone(),
    ))
    .start();

    let app_state = web::Data::new(AppState::new(Arc::clone(&session_manager)));
    let database = web::Data::new(database);
    let auth_config = config.auth.clone();

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new({
        let database = database.clone();
        move || {
            let gate = AuthenticationGate::new(session_manager.clone(), auth_config.clone());
            create_app(app_state.clone(), gate, Some(database.clone()))
        }
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    info!("Server stopped, shutting down background tasks");
    janitor.shutdown();
    database.close().await;

    result.map_err(Into::into)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init(),
    }
}
