pub mod auth;

pub use auth::{
    AuthenticatedUser, AuthenticationGate, AuthenticationGateMiddleware, CredentialGuard,
    MaybeAuthenticated,
};
