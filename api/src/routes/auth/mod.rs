//! Authentication route handlers
//!
//! - Login with email and password
//! - Refresh token rotation
//! - Logout of the current credential or of every session
//! - Listing the caller's active sessions
//! - Reporting the caller's identity

pub mod login;
pub mod logout;
pub mod logout_all;
pub mod me;
pub mod refresh;
pub mod sessions;

use std::sync::Arc;

use actix_web::HttpRequest;
use sv_core::domain::entities::subject::ClientInfo;
use sv_core::repositories::{RevocationRepository, SessionRepository};
use sv_core::services::SessionManager;

/// Application state that holds shared services
pub struct AppState<S, R>
where
    S: SessionRepository,
    R: RevocationRepository,
{
    pub session_manager: Arc<SessionManager<S, R>>,
}

impl<S, R> AppState<S, R>
where
    S: SessionRepository,
    R: RevocationRepository,
{
    pub fn new(session_manager: Arc<SessionManager<S, R>>) -> Self {
        Self { session_manager }
    }
}

/// Client address and user agent of the request
pub fn client_info(req: &HttpRequest) -> ClientInfo {
    let ip = extract_client_ip(req);
    let agent = req
        .headers()
        .get("User-Agent")
        .and_then(|ua| ua.to_str().ok());
    ClientInfo::from_parts(ip.as_deref(), agent)
}

/// Extract client IP address, preferring proxy headers
fn extract_client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                return Some(ip.trim().to_string());
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return Some(ip_str.to_string());
        }
    }

    req.connection_info().peer_addr().map(str::to_string)
}
