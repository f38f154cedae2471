pub mod auth;

pub use auth::{
    IdentityResponse, LoginRequest, LogoutAllResponse, LogoutRequest, RefreshTokenRequest,
    SessionSummary, SessionsResponse,
};
