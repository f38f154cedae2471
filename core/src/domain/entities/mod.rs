//! Domain entities representing core business objects.

pub mod revocation;
pub mod session;
pub mod subject;
pub mod token;

// Re-export commonly used types
pub use revocation::{RevocationReason, RevokedCredential};
pub use session::Session;
pub use subject::{ClientInfo, SubjectProfile, UNKNOWN_CLIENT};
pub use token::{
    token_fingerprint, AccessClaims, RefreshClaims, TokenPair, REFRESH_TOKEN_TYPE,
    TOKEN_TYPE_BEARER,
};
