//! Repository interfaces and in-memory implementations.
//!
//! MySQL implementations live in `sv_infra`.

pub mod revocation;
pub mod session;
pub mod subject;

pub use revocation::{InMemoryRevocationRepository, RevocationRepository};
pub use session::{InMemorySessionRepository, SessionRepository};
pub use subject::{InMemorySubjectDirectory, SubjectDirectory};
