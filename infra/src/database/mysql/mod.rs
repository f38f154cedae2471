//! MySQL repository implementations

mod revocation_repository_impl;
mod session_repository_impl;
mod subject_directory_impl;

pub use revocation_repository_impl::MySqlRevocationRepository;
pub use session_repository_impl::MySqlSessionRepository;
pub use subject_directory_impl::MySqlSubjectDirectory;
