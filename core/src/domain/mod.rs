//! Domain entities for the credential lifecycle.

pub mod entities;

pub use entities::*;
