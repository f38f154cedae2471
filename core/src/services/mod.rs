//! Business services containing domain logic and use cases.

pub mod credential;
pub mod janitor;
pub mod session;

// Re-export commonly used types
pub use credential::{CredentialConfig, CredentialIssuer};
pub use janitor::{Janitor, JanitorHandle, SweepReport};
pub use session::SessionManager;
