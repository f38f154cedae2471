//! Session manager module
//!
//! Issues token pairs, rotates refresh sessions with reuse detection,
//! maintains the revocation list and removes expired records.

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionManager;
