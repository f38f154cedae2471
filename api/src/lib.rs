//! HTTP surface of Session Vault.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use middleware::auth::{AuthenticatedUser, AuthenticationGate, CredentialGuard};
pub use routes::AppState;
